//! # Error Types
//!
//! One canonical error taxonomy for every fallible operation in the crate.
//! All operations return [`Result<T>`](Result), i.e. `Result<T, CryptoError>`.

use crate::consts::status;
use thiserror::Error;

/// The error type for all cryptor and random-source operations.
///
/// Only [`CryptoError::BufferTooSmall`] is retryable: the failed call consumed no
/// input, and retrying with an output buffer of at least the carried size succeeds.
/// Every other variant is terminal for the current operation sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoError {
    /// Invalid key, IV, tweak, round count, mode/algorithm combination, or a call
    /// made in the wrong state (e.g. `update` after `finalize`).
    #[error("invalid parameters")]
    InvalidParameters,

    /// Output buffer is smaller than the contained number of bytes.
    #[error("output buffer too small: {0} bytes required")]
    BufferTooSmall(usize),

    /// Memory for an output buffer could not be reserved.
    #[error("could not allocate memory")]
    CouldNotAllocateMemory,

    /// Input was not a whole number of blocks where no padding was configured.
    #[error("input length is not a multiple of the block size")]
    MisalignedMemory,

    /// Malformed padding or otherwise undecodable ciphertext.
    #[error("decoding failure")]
    DecodingFailure,

    /// The operation is not available for this algorithm (e.g. resetting RC4).
    #[error("operation not implemented for this algorithm")]
    Unimplemented,

    /// A length computation overflowed.
    #[error("length overflow")]
    Overflow,

    /// The platform random generator failed to produce the requested bytes.
    #[error("random number generator failure")]
    RngFailure,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CryptoError>;

impl CryptoError {
    /// Boundary status code of this error (`-4300` … `-4307`).
    #[must_use]
    pub const fn status(&self) -> i32 {
        match self {
            CryptoError::InvalidParameters => status::PARAM_ERROR,
            CryptoError::BufferTooSmall(_) => status::BUFFER_TOO_SMALL,
            CryptoError::CouldNotAllocateMemory => status::MEMORY_FAILURE,
            CryptoError::MisalignedMemory => status::ALIGNMENT_ERROR,
            CryptoError::DecodingFailure => status::DECODE_ERROR,
            CryptoError::Unimplemented => status::UNIMPLEMENTED,
            CryptoError::Overflow => status::OVERFLOW,
            CryptoError::RngFailure => status::RNG_FAILURE,
        }
    }

    /// Maps a boundary status code into the taxonomy.
    ///
    /// `required_size` is attached to [`CryptoError::BufferTooSmall`] and ignored
    /// for every other code. Unknown non-zero codes are reported as
    /// [`CryptoError::InvalidParameters`].
    pub fn check_status(code: i32, required_size: usize) -> Result<()> {
        match code {
            status::SUCCESS => Ok(()),
            status::PARAM_ERROR => Err(CryptoError::InvalidParameters),
            status::BUFFER_TOO_SMALL => Err(CryptoError::BufferTooSmall(required_size)),
            status::MEMORY_FAILURE => Err(CryptoError::CouldNotAllocateMemory),
            status::ALIGNMENT_ERROR => Err(CryptoError::MisalignedMemory),
            status::DECODE_ERROR => Err(CryptoError::DecodingFailure),
            status::UNIMPLEMENTED => Err(CryptoError::Unimplemented),
            status::OVERFLOW => Err(CryptoError::Overflow),
            status::RNG_FAILURE => Err(CryptoError::RngFailure),
            other => {
                log::warn!("unknown transform status code {other}");
                Err(CryptoError::InvalidParameters)
            }
        }
    }

    /// `true` only for the retryable [`CryptoError::BufferTooSmall`].
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, CryptoError::BufferTooSmall(_))
    }

    /// Minimum output size carried by [`CryptoError::BufferTooSmall`].
    #[must_use]
    pub const fn required_size(&self) -> Option<usize> {
        match self {
            CryptoError::BufferTooSmall(size) => Some(*size),
            _ => None,
        }
    }
}
