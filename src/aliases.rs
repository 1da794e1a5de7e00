//! # Secure-Gate Type Aliases
//!
//! Zeroize-on-drop buffers from [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! used for every piece of secret or plaintext-bearing state the cryptor keeps.
//!
//! ## Type Categories
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//!
//! ### Semantic Fixed-Size Types
//! - [`BlockBuffer`] - one block of the largest supported block size (partial-block buffer,
//!   chaining register, keystream block, XTS tweak)
//! - [`Rc4State256`] - RC4 permutation table
//!
//! ### Dynamic Secrets
//! - [`KeyMaterial`] - caller key held by [`CryptorBuilder`](crate::CryptorBuilder), and
//!   the XTS tweak key
//! - [`IvBytes`] - IV carried by a [`Mode`](crate::Mode) and its configuration
//! - [`ScratchBytes`] - temporary copy of in-place input
//!
//! All types require explicit `.expose_secret()` or `.expose_secret_mut()` to reach the bytes.

use crate::consts::MAX_BLOCK_SIZE;
use secure_gate::{Dynamic, Fixed};

/// Generic secure stack buffer (direct alias to secure-gate's `Fixed`).
pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

pub type BlockBuffer = SpanBuffer<MAX_BLOCK_SIZE>;
pub type Rc4State256 = SpanBuffer<256>;

pub type KeyMaterial = Dynamic<Vec<u8>>;
pub type IvBytes = Dynamic<Vec<u8>>;
pub type ScratchBytes = Dynamic<Vec<u8>>;

/// Fresh all-zero block buffer.
#[inline(always)]
pub(crate) fn zero_block() -> BlockBuffer {
    BlockBuffer::new([0u8; MAX_BLOCK_SIZE])
}

/// Block buffer holding `bytes` in its leading positions (rest zero).
///
/// `bytes.len()` must not exceed [`MAX_BLOCK_SIZE`]; callers pass validated IVs.
#[inline(always)]
pub(crate) fn block_from(bytes: &[u8]) -> BlockBuffer {
    let mut block = zero_block();
    block.expose_secret_mut()[..bytes.len()].copy_from_slice(bytes);
    block
}
