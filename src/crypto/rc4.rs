//! src/crypto/rc4.rs
//! RC4 keystream with variable-length keys (1..=512 bytes).

use crate::aliases::Rc4State256;
use crate::error::{CryptoError, Result};

/// RC4 state. The permutation lives in a zeroize-on-drop buffer.
pub(crate) struct Rc4 {
    state: Rc4State256,
    i: u8,
    j: u8,
}

impl Rc4 {
    pub(crate) fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(CryptoError::InvalidParameters);
        }

        let mut state = Rc4State256::new([0u8; 256]);
        let s = state.expose_secret_mut();
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        // Key scheduling: bytes past index 255 never participate.
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        Ok(Self { state, i: 0, j: 0 })
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    #[inline(always)]
    pub(crate) fn process(&mut self, data: &mut [u8]) {
        let s = self.state.expose_secret_mut();
        for byte in data.iter_mut() {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(s[self.i as usize]);
            s.swap(self.i as usize, self.j as usize);
            *byte ^= s[s[self.i as usize].wrapping_add(s[self.j as usize]) as usize];
        }
    }
}
