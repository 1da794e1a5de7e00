//! tests/common.rs
//! Common constants and helpers shared across test files

#![allow(dead_code)] // Each test file uses a different subset

use cryptor_rs::{
    Algorithm, AlgorithmConfiguration, CipherMode, Cryptor, Mode, Operation, Padding,
};

/// SP 800-38A key and IV
pub const KEY_128: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
pub const IV_16: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];
pub const IV_8: [u8; 8] = [0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10];

/// Message lengths exercising empty, sub-block, aligned and multi-block input
pub const MESSAGE_LENGTHS: &[usize] = &[0, 1, 7, 8, 15, 16, 17, 31, 32, 33, 100, 256];

/// Chunk sizes for streaming; `usize::MAX` means "everything in one call"
pub const CHUNK_SIZES: &[usize] = &[1, 3, 8, 16, 17, usize::MAX];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn config(algorithm: Algorithm) -> AlgorithmConfiguration {
    AlgorithmConfiguration::try_from(algorithm).expect("valid test configuration")
}

/// Deterministic, non-repeating-looking test message
pub fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

pub fn key(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 13 + 1) as u8).collect()
}

/// Whether `len` bytes can be encrypted under `config` without a padding error
pub fn compatible_length(config: &AlgorithmConfiguration, len: usize) -> bool {
    let block_shaped = matches!(
        config.mode(),
        CipherMode::Ecb | CipherMode::Cbc | CipherMode::Xts
    );
    !block_shaped || config.padding() == Padding::Pkcs7 || len % config.block_size() == 0
}

/// A named configuration plus a valid key for it
pub struct Case {
    pub name: &'static str,
    pub config: AlgorithmConfiguration,
    pub key: Vec<u8>,
}

fn case(name: &'static str, algorithm: Algorithm, key_len: usize) -> Case {
    Case {
        name,
        config: config(algorithm),
        key: key(key_len),
    }
}

/// Every algorithm, every mode it supports, both padding settings where they matter
pub fn all_cases() -> Vec<Case> {
    let iv16 = IV_16.to_vec();
    let iv8 = IV_8.to_vec();
    vec![
        case(
            "aes128-ecb-none",
            Algorithm::Aes(Mode::Ecb, Padding::None),
            16,
        ),
        case(
            "aes128-ecb-pkcs7",
            Algorithm::Aes(Mode::Ecb, Padding::Pkcs7),
            16,
        ),
        case(
            "aes192-cbc-pkcs7",
            Algorithm::Aes(Mode::cbc(iv16.clone()), Padding::Pkcs7),
            24,
        ),
        case(
            "aes256-cbc-none",
            Algorithm::Aes(Mode::cbc(iv16.clone()), Padding::None),
            32,
        ),
        case(
            "aes128-cfb",
            Algorithm::Aes(Mode::cfb(iv16.clone()), Padding::None),
            16,
        ),
        case(
            "aes256-ctr",
            Algorithm::Aes(Mode::ctr(iv16.clone()), Padding::None),
            32,
        ),
        case(
            "aes128-ofb",
            Algorithm::Aes(Mode::ofb(iv16.clone()), Padding::None),
            16,
        ),
        case(
            "aes128-cfb8",
            Algorithm::Aes(Mode::cfb8(iv16.clone()), Padding::None),
            16,
        ),
        case(
            "aes128-xts",
            Algorithm::Aes(Mode::xts(message(16)), Padding::None),
            16,
        ),
        case(
            "aes256-xts",
            Algorithm::Aes(Mode::xts(message(32)), Padding::None),
            32,
        ),
        case(
            "des-ecb-pkcs7",
            Algorithm::Des(Mode::Ecb, Padding::Pkcs7),
            8,
        ),
        case(
            "des-cbc-pkcs7",
            Algorithm::Des(Mode::cbc(iv8.clone()), Padding::Pkcs7),
            8,
        ),
        case(
            "des-ofb",
            Algorithm::Des(Mode::ofb(iv8.clone()), Padding::None),
            8,
        ),
        case(
            "3des-cbc-pkcs7",
            Algorithm::TripleDes(Mode::cbc(iv8.clone()), Padding::Pkcs7),
            24,
        ),
        case(
            "3des-ctr",
            Algorithm::TripleDes(Mode::ctr(iv8.clone()), Padding::None),
            24,
        ),
        case(
            "cast40-cbc-pkcs7",
            Algorithm::Cast(Mode::cbc(iv8.clone()), Padding::Pkcs7),
            5,
        ),
        case(
            "cast128-cfb",
            Algorithm::Cast(Mode::cfb(iv8.clone()), Padding::None),
            16,
        ),
        case(
            "blowfish64-cbc-none",
            Algorithm::Blowfish(Mode::cbc(iv8.clone()), Padding::None),
            8,
        ),
        case(
            "blowfish448-ecb-pkcs7",
            Algorithm::Blowfish(Mode::Ecb, Padding::Pkcs7),
            56,
        ),
        case(
            "blowfish-cfb8",
            Algorithm::Blowfish(Mode::cfb8(iv8), Padding::None),
            16,
        ),
        case("rc4-8", Algorithm::Rc4, 1),
        case("rc4-4096", Algorithm::Rc4, 512),
    ]
}

/// Feeds `input` through `cryptor` in `chunk`-sized updates, sizing every output
/// buffer with `output_length`, then finalizes.
pub fn process_chunked(
    cryptor: &mut Cryptor,
    input: &[u8],
    chunk: usize,
) -> cryptor_rs::Result<Vec<u8>> {
    let mut output = Vec::new();
    for piece in input.chunks(chunk.max(1)) {
        let mut buffer = vec![0u8; cryptor.output_length(piece.len(), false)];
        let written = cryptor.update(piece, &mut buffer)?;
        output.extend_from_slice(&buffer[..written]);
    }
    let mut buffer = vec![0u8; cryptor.output_length(0, true)];
    let written = cryptor.finalize(&mut buffer)?;
    output.extend_from_slice(&buffer[..written]);
    Ok(output)
}

pub fn run(
    operation: Operation,
    config: &AlgorithmConfiguration,
    key: &[u8],
    input: &[u8],
    chunk: usize,
) -> cryptor_rs::Result<Vec<u8>> {
    let mut cryptor = Cryptor::new(operation, config, key)?;
    process_chunked(&mut cryptor, input, chunk)
}
