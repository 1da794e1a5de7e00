// src/crypto/rng.rs
//! Platform CSPRNG access.
//!
//! Every call goes through a thread-local `OsRng`. Failures are never swallowed:
//! any shortfall from the platform generator surfaces as [`CryptoError::RngFailure`],
//! and the buffer contents are then unspecified.

use crate::aliases::SpanBuffer;
use crate::config::CipherAlgorithm;
use crate::error::{CryptoError, Result};
use rand::{rngs::OsRng, TryRngCore};
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Fills `buffer` completely with cryptographically secure random bytes.
///
/// Works for any mutable contiguous byte container: `[u8]`, `[u8; N]`, `Vec<u8>`, …
/// All-or-nothing: either the whole buffer is filled or `RngFailure` is returned.
pub fn fill_random<B>(buffer: &mut B) -> Result<()>
where
    B: AsMut<[u8]> + ?Sized,
{
    let bytes = buffer.as_mut();
    if bytes.is_empty() {
        return Ok(());
    }
    let len = bytes.len();
    RNG.with(|rng_cell| {
        let mut rng = rng_cell.borrow_mut();
        rng.try_fill_bytes(bytes).map_err(|e| {
            log::error!("platform RNG failed to produce {len} bytes: {e}");
            CryptoError::RngFailure
        })
    })
}

/// Fresh `N` random bytes in a zeroize-on-drop buffer (keys, IVs, tweaks).
pub fn random_bytes<const N: usize>() -> Result<SpanBuffer<N>> {
    let mut buffer = SpanBuffer::<N>::new([0u8; N]);
    fill_random(buffer.expose_secret_mut())?;
    Ok(buffer)
}

/// One random block-sized IV for `algorithm`.
///
/// RC4 takes no IV and yields `InvalidParameters`.
pub fn random_iv(algorithm: CipherAlgorithm) -> Result<Vec<u8>> {
    if algorithm.is_stream_cipher() {
        return Err(CryptoError::InvalidParameters);
    }
    let mut iv = vec![0u8; algorithm.block_size()];
    fill_random(&mut iv)?;
    Ok(iv)
}

// ---------------------------------------------------------------------------
// Optional explicit handle (almost never needed – just use fill_random)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    #[inline(always)]
    pub fn new() -> Self {
        Self(OsRng)
    }

    pub fn fill<T>(&mut self, dest: &mut T) -> Result<()>
    where
        T: AsMut<[u8]> + ?Sized,
    {
        self.0.try_fill_bytes(dest.as_mut()).map_err(|e| {
            log::error!("platform RNG failure: {e}");
            CryptoError::RngFailure
        })
    }
}
