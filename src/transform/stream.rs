//! src/transform/stream.rs
//! Stream-shaped transforms: RC4 and the feedback modes (CFB, CTR, OFB, CFB8).
//! One output byte per input byte, nothing is ever held back.

use crate::aliases::{block_from, BlockBuffer};
use crate::config::{AlgorithmConfiguration, CipherMode, Operation};
use crate::crypto::feedback::FeedbackMode;
use crate::crypto::primitive::BlockPrimitive;
use crate::crypto::rc4::Rc4;
use crate::error::{CryptoError, Result};

pub(crate) struct FeedbackState {
    operation: Operation,
    mode: CipherMode,
    /// Pristine key schedule; every (re)start clones it.
    primitive: BlockPrimitive,
    block_size: usize,
    initial: BlockBuffer,
    running: FeedbackMode,
}

pub(crate) enum StreamTransform {
    Rc4(Rc4),
    Feedback(FeedbackState),
}

impl StreamTransform {
    pub(crate) fn rc4(key: &[u8]) -> Result<Self> {
        Ok(StreamTransform::Rc4(Rc4::new(key)?))
    }

    pub(crate) fn feedback(
        operation: Operation,
        config: &AlgorithmConfiguration,
        key: &[u8],
    ) -> Result<Self> {
        let mode = config.mode();
        let iv = config.iv().ok_or(CryptoError::InvalidParameters)?;
        let primitive = BlockPrimitive::new(config.algorithm(), key)?;
        let block_size = primitive.block_size();
        if iv.len() != block_size {
            return Err(CryptoError::InvalidParameters);
        }

        let running = FeedbackMode::start(mode, operation, &primitive, iv)?;
        Ok(StreamTransform::Feedback(FeedbackState {
            operation,
            mode,
            primitive,
            block_size,
            initial: block_from(iv),
            running,
        }))
    }

    /// Transforms `data` in place.
    pub(crate) fn process(&mut self, data: &mut [u8]) -> Result<()> {
        match self {
            StreamTransform::Rc4(rc4) => {
                rc4.process(data);
                Ok(())
            }
            StreamTransform::Feedback(state) => state.running.process(data),
        }
    }

    pub(crate) fn reset(&mut self, iv: Option<&[u8]>) -> Result<()> {
        match self {
            StreamTransform::Rc4(_) => Err(CryptoError::Unimplemented),
            StreamTransform::Feedback(state) => {
                if let Some(iv) = iv {
                    if iv.len() != state.block_size {
                        return Err(CryptoError::InvalidParameters);
                    }
                    state.initial = block_from(iv);
                }
                state.restart()
            }
        }
    }
}

impl FeedbackState {
    fn restart(&mut self) -> Result<()> {
        let iv = &self.initial.expose_secret()[..self.block_size];
        self.running = FeedbackMode::start(self.mode, self.operation, &self.primitive, iv)?;
        Ok(())
    }
}
