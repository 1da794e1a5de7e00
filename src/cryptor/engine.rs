//! src/cryptor/engine.rs
//! Streaming cryptor: create, update*, finalize, reset.

use crate::config::{Algorithm, AlgorithmConfiguration, Operation};
use crate::error::{CryptoError, Result};
use crate::transform::Transform;
use crate::utils::allocate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CryptorState {
    Active,
    Finalized,
}

/// A stateful encrypt/decrypt context.
///
/// Feed data through [`update`](Self::update) any number of times, then call
/// [`finalize`](Self::finalize) once. [`reset`](Self::reset) makes a finalized (or
/// half-used) cryptor usable again without re-keying.
///
/// Size output buffers with [`output_length`](Self::output_length): a buffer of exactly
/// that size never yields [`CryptoError::BufferTooSmall`]. When it does occur, no input
/// has been consumed and the same call can be retried with a larger buffer.
///
/// # Thread Safety
///
/// A `Cryptor` is `Send` but every operation takes `&mut self`; it is meant to be
/// driven by one caller at a time. Distinct cryptors share nothing.
pub struct Cryptor {
    operation: Operation,
    configuration: AlgorithmConfiguration,
    transform: Transform,
    state: CryptorState,
}

impl Cryptor {
    /// Keys a new cryptor.
    ///
    /// Fails with [`CryptoError::InvalidParameters`] for a key length outside
    /// [`CipherAlgorithm::key_sizes`](crate::CipherAlgorithm::key_sizes), an XTS tweak
    /// whose length differs from the key, or an otherwise invalid configuration.
    pub fn new(
        operation: Operation,
        configuration: &AlgorithmConfiguration,
        key: &[u8],
    ) -> Result<Self> {
        let transform = Transform::create(operation, configuration, key)?;
        log::debug!(
            "created {operation:?} cryptor: {:?}/{:?}/{:?}",
            configuration.algorithm(),
            configuration.mode(),
            configuration.padding()
        );
        Ok(Self {
            operation,
            configuration: configuration.clone(),
            transform,
            state: CryptorState::Active,
        })
    }

    /// Normalizes `algorithm` and keys a new cryptor from it.
    pub fn with_algorithm(operation: Operation, algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        let configuration = AlgorithmConfiguration::try_from(algorithm)?;
        Self::new(operation, &configuration, key)
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub const fn configuration(&self) -> &AlgorithmConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == CryptorState::Finalized
    }

    /// Upper bound on the bytes the next call can emit.
    ///
    /// Without `finalizing`: what `update(input_len bytes)` writes. With `finalizing`:
    /// what `update(input_len bytes)` followed by `finalize` writes in total.
    /// Stream-shaped modes return `input_len`. Never fails.
    #[must_use]
    pub fn output_length(&self, input_len: usize, finalizing: bool) -> usize {
        self.transform.output_length(input_len, finalizing)
    }

    /// Transforms `input` into `output`, returning the bytes written.
    ///
    /// Any input length is accepted; partial blocks are carried to the next call.
    /// An empty input writes nothing.
    pub fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.ensure_active()?;
        self.transform.update(input, output)
    }

    /// In-place variant of [`update`](Self::update): `buffer[..input_len]` holds the
    /// input, and output is written from `buffer[0]`.
    ///
    /// `buffer.len()` must be at least `output_length(input_len, false)`.
    pub fn update_in_place(&mut self, buffer: &mut [u8], input_len: usize) -> Result<usize> {
        self.ensure_active()?;
        self.transform.update_in_place(buffer, input_len)
    }

    /// Drains the final block (applying or stripping padding) into `output`.
    ///
    /// Fails with [`CryptoError::MisalignedMemory`] when unpadded input was not block
    /// aligned, and [`CryptoError::DecodingFailure`] on malformed padding. Any outcome
    /// other than `BufferTooSmall` finalizes the cryptor.
    pub fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        self.ensure_active()?;
        let result = self.transform.finalize(output);
        match &result {
            Err(CryptoError::BufferTooSmall(required)) => {
                log::debug!("finalize needs {required} output bytes, retry allowed");
            }
            Err(e) => {
                log::debug!("finalize failed (status {}): {e}", e.status());
                self.state = CryptorState::Finalized;
            }
            Ok(_) => self.state = CryptorState::Finalized,
        }
        result
    }

    /// Discards pending data and returns to the active state.
    ///
    /// `Some(iv)` replaces the IV (for XTS: the data-unit tweak value); `None` keeps the
    /// current one. RC4 cannot be reset ([`CryptoError::Unimplemented`]).
    pub fn reset(&mut self, iv: Option<&[u8]>) -> Result<()> {
        self.transform.reset(iv)?;
        self.state = CryptorState::Active;
        log::debug!(
            "reset {:?} cryptor ({})",
            self.operation,
            if iv.is_some() { "new iv" } else { "same iv" }
        );
        Ok(())
    }

    /// Allocating variant of [`update`](Self::update).
    pub fn update_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = allocate(self.output_length(input.len(), false))?;
        let written = self.update(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }

    /// Allocating variant of [`finalize`](Self::finalize).
    pub fn finalize_to_vec(&mut self) -> Result<Vec<u8>> {
        let mut output = allocate(self.output_length(0, true))?;
        let written = self.finalize(&mut output)?;
        output.truncate(written);
        Ok(output)
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            CryptorState::Active => Ok(()),
            CryptorState::Finalized => {
                log::debug!("cryptor already finalized; reset before reuse");
                Err(CryptoError::InvalidParameters)
            }
        }
    }
}

impl std::fmt::Debug for Cryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cryptor")
            .field("operation", &self.operation)
            .field("configuration", &self.configuration)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
