//! src/transform/block.rs
//! Block-shaped modes (ECB, CBC, XTS): partial-block buffering, PKCS7, and
//! hold-back of the final block while decrypting padded data.

use crate::aliases::{block_from, zero_block, BlockBuffer};
use crate::config::{AlgorithmConfiguration, CipherAlgorithm, CipherMode, Operation, Padding};
use crate::consts::MAX_BLOCK_SIZE;
use crate::crypto::primitive::BlockPrimitive;
use crate::error::{CryptoError, Result};
use crate::utils::{gf128_mul_alpha, round_down, round_up, xor_in_place};
use subtle::ConstantTimeEq;

enum Chaining {
    Ecb,
    Cbc,
    /// Second primitive keyed with the tweak key; encrypts the data-unit value.
    Xts {
        tweak_cipher: BlockPrimitive,
    },
}

pub(crate) struct BlockTransform {
    operation: Operation,
    primitive: BlockPrimitive,
    chaining: Chaining,
    padding: Padding,
    block_size: usize,
    /// CBC: IV. XTS: data-unit tweak value (before encryption).
    initial: BlockBuffer,
    /// CBC: previous ciphertext block. XTS: running tweak.
    chain: BlockBuffer,
    pending: BlockBuffer,
    pending_len: usize,
}

impl BlockTransform {
    pub(crate) fn new(
        operation: Operation,
        config: &AlgorithmConfiguration,
        key: &[u8],
    ) -> Result<Self> {
        let primitive = BlockPrimitive::new(config.algorithm(), key)?;
        let block_size = primitive.block_size();

        let (chaining, initial) = match config.mode() {
            CipherMode::Ecb => (Chaining::Ecb, zero_block()),
            CipherMode::Cbc => {
                let iv = config.iv().ok_or(CryptoError::InvalidParameters)?;
                (Chaining::Cbc, block_from(iv))
            }
            CipherMode::Xts => {
                let tweak = config.tweak().ok_or(CryptoError::InvalidParameters)?;
                if tweak.len() != key.len() {
                    return Err(CryptoError::InvalidParameters);
                }
                let tweak_cipher = BlockPrimitive::new(CipherAlgorithm::Aes, tweak)?;
                (Chaining::Xts { tweak_cipher }, zero_block())
            }
            _ => return Err(CryptoError::InvalidParameters),
        };

        let mut this = Self {
            operation,
            primitive,
            chaining,
            padding: config.padding(),
            block_size,
            initial,
            chain: zero_block(),
            pending: zero_block(),
            pending_len: 0,
        };
        this.restart_chain();
        Ok(this)
    }

    #[inline(always)]
    fn holds_back_last_block(&self) -> bool {
        self.operation == Operation::Decrypt && self.padding == Padding::Pkcs7
    }

    pub(crate) fn output_length(&self, input_len: usize, finalizing: bool) -> usize {
        let bs = self.block_size;
        let total = self.pending_len.saturating_add(input_len);
        match (finalizing, self.padding, self.operation) {
            (false, Padding::Pkcs7, Operation::Decrypt) => match total {
                0 => 0,
                n => round_down(n - 1, bs),
            },
            (false, _, _) => round_down(total, bs),
            (true, Padding::None, _) => round_up(total, bs),
            (true, Padding::Pkcs7, Operation::Encrypt) => round_down(total, bs).saturating_add(bs),
            (true, Padding::Pkcs7, Operation::Decrypt) => round_up(total, bs),
        }
    }

    pub(crate) fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.pending_len
            .checked_add(input.len())
            .ok_or(CryptoError::Overflow)?;
        let required = self.output_length(input.len(), false);
        if output.len() < required {
            return Err(CryptoError::BufferTooSmall(required));
        }

        let bs = self.block_size;
        let hold_back = self.holds_back_last_block();
        let mut rest = input;
        let mut written = 0;

        // Top up a partially-filled pending block first.
        if self.pending_len > 0 {
            let take = (bs - self.pending_len).min(rest.len());
            self.pending.expose_secret_mut()[self.pending_len..self.pending_len + take]
                .copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];

            if self.pending_len < bs || (hold_back && rest.is_empty()) {
                return Ok(0);
            }

            output[..bs].copy_from_slice(&self.pending.expose_secret()[..bs]);
            self.process_block(&mut output[..bs]);
            self.pending_len = 0;
            written = bs;
        }

        // Whole blocks go straight through.
        let mut whole = round_down(rest.len(), bs);
        if hold_back && whole > 0 && whole == rest.len() {
            whole -= bs;
        }
        for block in rest[..whole].chunks_exact(bs) {
            let out = &mut output[written..written + bs];
            out.copy_from_slice(block);
            self.process_block(out);
            written += bs;
        }

        let tail = &rest[whole..];
        self.pending.expose_secret_mut()[..tail.len()].copy_from_slice(tail);
        self.pending_len = tail.len();

        Ok(written)
    }

    pub(crate) fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        let bs = self.block_size;

        match (self.padding, self.operation) {
            (Padding::None, _) => {
                if self.pending_len != 0 {
                    log::debug!(
                        "finalize with {} trailing bytes and no padding",
                        self.pending_len
                    );
                    return Err(CryptoError::MisalignedMemory);
                }
                Ok(0)
            }
            (Padding::Pkcs7, Operation::Encrypt) => {
                if output.len() < bs {
                    return Err(CryptoError::BufferTooSmall(bs));
                }
                let pad = (bs - self.pending_len) as u8;
                self.pending.expose_secret_mut()[self.pending_len..bs].fill(pad);
                output[..bs].copy_from_slice(&self.pending.expose_secret()[..bs]);
                self.process_block(&mut output[..bs]);
                self.pending_len = 0;
                Ok(bs)
            }
            (Padding::Pkcs7, Operation::Decrypt) => {
                match self.pending_len {
                    0 => return Err(CryptoError::DecodingFailure),
                    n if n != bs => return Err(CryptoError::MisalignedMemory),
                    _ => {}
                }
                if output.len() < bs {
                    return Err(CryptoError::BufferTooSmall(bs));
                }

                let mut block = zero_block();
                block.expose_secret_mut()[..bs]
                    .copy_from_slice(&self.pending.expose_secret()[..bs]);
                self.pending_len = 0;
                self.process_block(&mut block.expose_secret_mut()[..bs]);

                let plain = &block.expose_secret()[..bs];
                let padding = plain[bs - 1];

                // Range check is on a public length; byte comparison is constant-time.
                if padding == 0 || padding as usize > bs {
                    log::warn!("PKCS7 padding value out of range");
                    return Err(CryptoError::DecodingFailure);
                }
                let padding_start = bs - padding as usize;
                let expected = [padding; MAX_BLOCK_SIZE];
                if !bool::from(plain[padding_start..].ct_eq(&expected[..padding as usize])) {
                    log::warn!("corrupt PKCS7 padding");
                    return Err(CryptoError::DecodingFailure);
                }

                output[..padding_start].copy_from_slice(&plain[..padding_start]);
                Ok(padding_start)
            }
        }
    }

    /// Discards pending bytes and restarts chaining from `iv`, or from the
    /// current initial value when `None`.
    pub(crate) fn reset(&mut self, iv: Option<&[u8]>) -> Result<()> {
        match (&self.chaining, iv) {
            (Chaining::Ecb, Some(_)) => return Err(CryptoError::InvalidParameters),
            (_, Some(iv)) if iv.len() != self.block_size => {
                return Err(CryptoError::InvalidParameters)
            }
            (_, Some(iv)) => self.initial = block_from(iv),
            (_, None) => {}
        }
        self.pending = zero_block();
        self.pending_len = 0;
        self.restart_chain();
        Ok(())
    }

    fn restart_chain(&mut self) {
        self.chain = block_from(&self.initial.expose_secret()[..self.block_size]);
        if let Chaining::Xts { tweak_cipher } = &self.chaining {
            tweak_cipher.encrypt_block(&mut self.chain.expose_secret_mut()[..]);
        }
    }

    /// Transforms one block in place, advancing the chaining state.
    fn process_block(&mut self, block: &mut [u8]) {
        let bs = self.block_size;
        match (&self.chaining, self.operation) {
            (Chaining::Ecb, Operation::Encrypt) => self.primitive.encrypt_block(block),
            (Chaining::Ecb, Operation::Decrypt) => self.primitive.decrypt_block(block),
            (Chaining::Cbc, Operation::Encrypt) => {
                xor_in_place(block, &self.chain.expose_secret()[..bs]);
                self.primitive.encrypt_block(block);
                self.chain.expose_secret_mut()[..bs].copy_from_slice(block);
            }
            (Chaining::Cbc, Operation::Decrypt) => {
                let ciphertext = block_from(block);
                self.primitive.decrypt_block(block);
                xor_in_place(block, &self.chain.expose_secret()[..bs]);
                self.chain = ciphertext;
            }
            (Chaining::Xts { .. }, operation) => {
                xor_in_place(block, self.chain.expose_secret());
                match operation {
                    Operation::Encrypt => self.primitive.encrypt_block(block),
                    Operation::Decrypt => self.primitive.decrypt_block(block),
                }
                xor_in_place(block, self.chain.expose_secret());
                gf128_mul_alpha(self.chain.expose_secret_mut());
            }
        }
    }
}
