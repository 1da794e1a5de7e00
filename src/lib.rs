// src/lib.rs

//! Streaming symmetric cryptor.
//!
//! AES, DES, 3DES, CAST5, Blowfish and RC4 over ECB, CBC, CFB, CTR, OFB, XTS and CFB8,
//! with optional PKCS7 padding, plus a fill-from-the-platform-CSPRNG helper.
//!
//! ```
//! use cryptor_rs::{crypt_to_vec, Algorithm, AlgorithmConfiguration, Mode, Operation, Padding};
//!
//! let config = AlgorithmConfiguration::try_from(
//!     Algorithm::Aes(Mode::cbc([0u8; 16]), Padding::Pkcs7),
//! ).unwrap();
//! let key = b"YELLOW SUBMARINE";
//!
//! let ciphertext = crypt_to_vec(Operation::Encrypt, &config, key, b"YELLOW SUBMARINE").unwrap();
//! assert_eq!(ciphertext.len(), 32);
//!
//! let plaintext = crypt_to_vec(Operation::Decrypt, &config, key, &ciphertext).unwrap();
//! assert_eq!(plaintext, b"YELLOW SUBMARINE");
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod cryptor;
pub mod error;
pub(crate) mod transform;
pub mod utils;

// High-level API
pub use config::{
    Algorithm, AlgorithmConfiguration, CipherAlgorithm, CipherMode, KeySizes, Mode, Operation,
    Padding,
};
pub use cryptor::{crypt, crypt_to_vec, Cryptor};
pub use error::{CryptoError, Result};

pub use builders::cryptor_builder::CryptorBuilder;
pub use crypto::rng::{fill_random, random_bytes, random_iv, SecureRng};

#[cfg(feature = "batch-ops")]
pub use batch_ops::crypt_batch;
