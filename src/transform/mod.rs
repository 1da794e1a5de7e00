// src/transform/mod.rs

//! Transform layer: the keyed, stateful engine behind a [`Cryptor`](crate::Cryptor).
//!
//! A [`Transform`] is created once from a validated configuration and key, driven
//! through `update`/`finalize`/`reset`, and released exactly once when dropped.
//! Secret state (key schedules, chaining registers, pending plaintext) lives in
//! zeroize-on-drop buffers, so abandoning a transform mid-stream leaks nothing.
//!
//! Every call that writes output checks capacity against [`Transform::output_length`]
//! before touching any state, so `BufferTooSmall` never consumes input.

pub(crate) mod block;
pub(crate) mod stream;

use crate::aliases::ScratchBytes;
use crate::config::{AlgorithmConfiguration, CipherMode, Operation};
use crate::error::{CryptoError, Result};
use crate::utils::allocate;
use block::BlockTransform;
use stream::StreamTransform;

pub(crate) enum Transform {
    Block(BlockTransform),
    Stream(StreamTransform),
}

impl Transform {
    pub(crate) fn create(
        operation: Operation,
        config: &AlgorithmConfiguration,
        key: &[u8],
    ) -> Result<Self> {
        config.validate()?;
        if !config.algorithm().key_sizes().contains(key.len()) {
            log::debug!("{:?} rejects a {}-byte key", config.algorithm(), key.len());
            return Err(CryptoError::InvalidParameters);
        }

        let transform = match config.mode() {
            CipherMode::Ecb | CipherMode::Cbc | CipherMode::Xts => {
                Transform::Block(BlockTransform::new(operation, config, key)?)
            }
            CipherMode::Stream => Transform::Stream(StreamTransform::rc4(key)?),
            CipherMode::Cfb | CipherMode::Ctr | CipherMode::Ofb | CipherMode::Cfb8 => {
                Transform::Stream(StreamTransform::feedback(operation, config, key)?)
            }
        };
        Ok(transform)
    }

    /// Upper bound on the bytes the next call may emit. With `finalizing`, covers an
    /// `update` of `input_len` bytes followed by `finalize`. Never fails; saturates.
    pub(crate) fn output_length(&self, input_len: usize, finalizing: bool) -> usize {
        match self {
            Transform::Block(block) => block.output_length(input_len, finalizing),
            Transform::Stream(_) => input_len,
        }
    }

    pub(crate) fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        match self {
            Transform::Block(block) => block.update(input, output),
            Transform::Stream(stream) => {
                if output.len() < input.len() {
                    return Err(CryptoError::BufferTooSmall(input.len()));
                }
                let out = &mut output[..input.len()];
                out.copy_from_slice(input);
                if let Err(e) = stream.process(out) {
                    out.fill(0);
                    return Err(e);
                }
                Ok(input.len())
            }
        }
    }

    /// `buffer[..input_len]` is the input; output is written from `buffer[0]`.
    pub(crate) fn update_in_place(&mut self, buffer: &mut [u8], input_len: usize) -> Result<usize> {
        if input_len > buffer.len() {
            return Err(CryptoError::InvalidParameters);
        }
        match self {
            Transform::Stream(stream) => {
                stream.process(&mut buffer[..input_len])?;
                Ok(input_len)
            }
            Transform::Block(block) => {
                let required = block.output_length(input_len, false);
                if buffer.len() < required {
                    return Err(CryptoError::BufferTooSmall(required));
                }
                // Output may run ahead of unread input when a partial block is pending.
                let mut copy = allocate(input_len)?;
                copy.copy_from_slice(&buffer[..input_len]);
                let scratch = ScratchBytes::new(copy);
                block.update(scratch.expose_secret(), buffer)
            }
        }
    }

    pub(crate) fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        match self {
            Transform::Block(block) => block.finalize(output),
            Transform::Stream(_) => Ok(0),
        }
    }

    pub(crate) fn reset(&mut self, iv: Option<&[u8]>) -> Result<()> {
        match self {
            Transform::Block(block) => block.reset(iv),
            Transform::Stream(stream) => stream.reset(iv),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Transform::Block(_) => "block",
            Transform::Stream(_) => "stream",
        }
    }
}

impl Drop for Transform {
    fn drop(&mut self) {
        log::trace!("releasing {} transform", self.kind());
    }
}
