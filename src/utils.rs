// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::error::{CryptoError, Result};
use subtle::ConstantTimeEq;

/// XORs `mask` into `target` in place, over `target.len()` bytes.
#[inline(always)]
pub fn xor_in_place(target: &mut [u8], mask: &[u8]) {
    for (byte, m) in target.iter_mut().zip(mask) {
        *byte ^= m;
    }
}

/// Constant-time equality of two byte strings; differing lengths compare unequal.
#[inline(always)]
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}

/// Largest multiple of `block_size` that is `<= len`.
///
/// `block_size` must be non-zero.
#[inline(always)]
pub const fn round_down(len: usize, block_size: usize) -> usize {
    len - len % block_size
}

/// Smallest multiple of `block_size` that is `>= len`, saturating at the largest
/// representable multiple.
#[inline(always)]
pub const fn round_up(len: usize, block_size: usize) -> usize {
    let rem = len % block_size;
    if rem == 0 {
        len
    } else {
        match len.checked_add(block_size - rem) {
            Some(v) => v,
            None => round_down(usize::MAX, block_size),
        }
    }
}

/// Multiplies a 128-bit XTS tweak by α in GF(2^128), little-endian byte order
/// (IEEE 1619).
#[inline(always)]
pub fn gf128_mul_alpha(tweak: &mut [u8; 16]) {
    let mut carry = 0u8;
    for byte in tweak.iter_mut() {
        let next_carry = *byte >> 7;
        *byte = (*byte << 1) | carry;
        carry = next_carry;
    }
    if carry != 0 {
        tweak[0] ^= 0x87;
    }
}

/// Zeroed buffer of `len` bytes; reservation failure maps to
/// [`CryptoError::CouldNotAllocateMemory`] instead of aborting.
pub(crate) fn allocate(len: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| CryptoError::CouldNotAllocateMemory)?;
    buffer.resize(len, 0);
    Ok(buffer)
}
