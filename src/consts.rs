//! # Constants
//!
//! Block sizes, key-size bounds and the status codes of the transform boundary.

/// Largest block size of any supported algorithm (AES).
///
/// Every internal block buffer is sized to this and sliced to the algorithm's
/// actual block size.
pub const MAX_BLOCK_SIZE: usize = 16;

pub const BLOCK_SIZE_AES128: usize = 16;
pub const BLOCK_SIZE_DES: usize = 8;
pub const BLOCK_SIZE_3DES: usize = 8;
pub const BLOCK_SIZE_CAST: usize = 8;
pub const BLOCK_SIZE_BLOWFISH: usize = 8;

/// RC4 has no block structure.
pub const BLOCK_SIZE_RC4: usize = 0;

pub const KEY_SIZE_AES128: usize = 16;
pub const KEY_SIZE_AES192: usize = 24;
pub const KEY_SIZE_AES256: usize = 32;
pub const KEY_SIZE_DES: usize = 8;
pub const KEY_SIZE_3DES: usize = 24;
pub const KEY_SIZE_MIN_CAST: usize = 5;
pub const KEY_SIZE_MAX_CAST: usize = 16;
pub const KEY_SIZE_MIN_RC4: usize = 1;
pub const KEY_SIZE_MAX_RC4: usize = 512;
pub const KEY_SIZE_MIN_BLOWFISH: usize = 8;
pub const KEY_SIZE_MAX_BLOWFISH: usize = 56;

/// Valid AES key lengths, in bytes.
pub const AES_KEY_SIZES: &[usize] = &[KEY_SIZE_AES128, KEY_SIZE_AES192, KEY_SIZE_AES256];

/// Default CFB8 round count used by the caller-level [`Mode::cfb8`](crate::Mode::cfb8) helper.
pub const DEFAULT_CFB8_ROUNDS: u32 = 1;

/// Raw status codes of the transform boundary.
///
/// `SUCCESS` is the only non-error value; every other code maps onto exactly one
/// [`CryptoError`](crate::CryptoError) variant.
pub mod status {
    pub const SUCCESS: i32 = 0;
    pub const PARAM_ERROR: i32 = -4300;
    pub const BUFFER_TOO_SMALL: i32 = -4301;
    pub const MEMORY_FAILURE: i32 = -4302;
    pub const ALIGNMENT_ERROR: i32 = -4303;
    pub const DECODE_ERROR: i32 = -4304;
    pub const UNIMPLEMENTED: i32 = -4305;
    pub const OVERFLOW: i32 = -4306;
    pub const RNG_FAILURE: i32 = -4307;
}
