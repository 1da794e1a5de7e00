//! src/crypto/primitive.rs
//! Keyed single-block primitives, one variant per supported block algorithm.

use crate::config::CipherAlgorithm;
use crate::error::{CryptoError, Result};
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use blowfish::Blowfish;
use cast5::Cast5;
use des::{Des, TdesEde3};

/// A keyed block cipher. Blocks are passed as slices of exactly [`block_size`](Self::block_size) bytes.
pub(crate) enum BlockPrimitive {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
    Des(Des),
    TripleDes(TdesEde3),
    Cast(Cast5),
    Blowfish(Blowfish),
}

macro_rules! with_cipher {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            BlockPrimitive::Aes128($c) => $body,
            BlockPrimitive::Aes192($c) => $body,
            BlockPrimitive::Aes256($c) => $body,
            BlockPrimitive::Des($c) => $body,
            BlockPrimitive::TripleDes($c) => $body,
            BlockPrimitive::Cast($c) => $body,
            BlockPrimitive::Blowfish($c) => $body,
        }
    };
}

impl BlockPrimitive {
    /// Keys a primitive. The caller has already checked `key` against
    /// [`CipherAlgorithm::key_sizes`]; a rejection here still maps to `InvalidParameters`.
    pub(crate) fn new(algorithm: CipherAlgorithm, key: &[u8]) -> Result<Self> {
        let invalid = |_| CryptoError::InvalidParameters;
        let primitive = match algorithm {
            CipherAlgorithm::Aes => match key.len() {
                16 => BlockPrimitive::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
                24 => BlockPrimitive::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
                32 => BlockPrimitive::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
                _ => return Err(CryptoError::InvalidParameters),
            },
            CipherAlgorithm::Des => BlockPrimitive::Des(Des::new_from_slice(key).map_err(invalid)?),
            CipherAlgorithm::TripleDes => {
                BlockPrimitive::TripleDes(TdesEde3::new_from_slice(key).map_err(invalid)?)
            }
            CipherAlgorithm::Cast => {
                BlockPrimitive::Cast(Cast5::new_from_slice(key).map_err(invalid)?)
            }
            CipherAlgorithm::Blowfish => {
                BlockPrimitive::Blowfish(Blowfish::new_from_slice(key).map_err(invalid)?)
            }
            CipherAlgorithm::Rc4 => return Err(CryptoError::InvalidParameters),
        };
        Ok(primitive)
    }

    pub(crate) const fn block_size(&self) -> usize {
        match self {
            BlockPrimitive::Aes128(_) | BlockPrimitive::Aes192(_) | BlockPrimitive::Aes256(_) => 16,
            _ => 8,
        }
    }

    #[inline(always)]
    pub(crate) fn encrypt_block(&self, block: &mut [u8]) {
        with_cipher!(self, c => c.encrypt_block(GenericArray::from_mut_slice(block)))
    }

    #[inline(always)]
    pub(crate) fn decrypt_block(&self, block: &mut [u8]) {
        with_cipher!(self, c => c.decrypt_block(GenericArray::from_mut_slice(block)))
    }
}
