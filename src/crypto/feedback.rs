//! src/crypto/feedback.rs
//! Keyed stream-shaped block modes (CTR, OFB, CFB, CFB8) over every block primitive.
//!
//! Each mode is started from a clone of a [`BlockPrimitive`]'s key schedule plus an
//! IV, so restarting with a new IV never re-runs key expansion.

use crate::config::{CipherMode, Operation};
use crate::crypto::primitive::BlockPrimitive;
use crate::error::{CryptoError, Result};
use aes::cipher::consts::U256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::typenum::{IsLess, Le, NonZero};
use aes::cipher::{
    BlockCipher, BlockDecryptMut, BlockEncryptMut, InnerIvInit, InvalidLength, StreamCipher,
    StreamCipherCore, StreamCipherCoreWrapper,
};
use aes::{Aes128, Aes192, Aes256};
use blowfish::Blowfish;
use cast5::Cast5;
use cfb8::{Decryptor as Cfb8Decryptor, Encryptor as Cfb8Encryptor};
use cfb_mode::{BufDecryptor, BufEncryptor};
use ctr::{Ctr128BE, Ctr64BE};
use des::{Des, TdesEde3};
use ofb::Ofb;

/// Builds a mode from a cloned key schedule and an IV. Stream-core wrappers (CTR,
/// OFB) are initialised through their core type, the rest directly.
trait IvStart: Sized {
    type Inner;
    fn iv_start(inner: Self::Inner, iv: &[u8]) -> core::result::Result<Self, InvalidLength>;
}

impl<T> IvStart for StreamCipherCoreWrapper<T>
where
    T: StreamCipherCore + InnerIvInit,
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    type Inner = T::Inner;
    fn iv_start(inner: T::Inner, iv: &[u8]) -> core::result::Result<Self, InvalidLength> {
        T::inner_iv_slice_init(inner, iv).map(Self::from_core)
    }
}

macro_rules! direct_iv_start {
    ($($ty:ident),*) => {$(
        impl<C: BlockEncryptMut + BlockCipher> IvStart for $ty<C> {
            type Inner = C;
            fn iv_start(inner: C, iv: &[u8]) -> core::result::Result<Self, InvalidLength> {
                <$ty<C> as InnerIvInit>::inner_iv_slice_init(inner, iv)
            }
        }
    )*};
}

direct_iv_start!(BufEncryptor, BufDecryptor, Cfb8Encryptor, Cfb8Decryptor);

/// Declares one mode enum with a variant per primitive. `$wide` wraps the 16-byte
/// block ciphers, `$narrow` the 8-byte ones.
macro_rules! keyed_mode {
    ($(#[$meta:meta])* $name:ident, $wide:ident, $narrow:ident) => {
        $(#[$meta])*
        pub(crate) enum $name {
            Aes128($wide<Aes128>),
            Aes192($wide<Aes192>),
            Aes256($wide<Aes256>),
            Des($narrow<Des>),
            TripleDes($narrow<TdesEde3>),
            Cast($narrow<Cast5>),
            Blowfish($narrow<Blowfish>),
        }

        impl $name {
            fn start(primitive: &BlockPrimitive, iv: &[u8]) -> Result<Self> {
                let invalid = |_| CryptoError::InvalidParameters;
                let mode = match primitive {
                    BlockPrimitive::Aes128(c) => $name::Aes128(
                        <$wide<Aes128> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                    BlockPrimitive::Aes192(c) => $name::Aes192(
                        <$wide<Aes192> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                    BlockPrimitive::Aes256(c) => $name::Aes256(
                        <$wide<Aes256> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                    BlockPrimitive::Des(c) => $name::Des(
                        <$narrow<Des> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                    BlockPrimitive::TripleDes(c) => $name::TripleDes(
                        <$narrow<TdesEde3> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                    BlockPrimitive::Cast(c) => $name::Cast(
                        <$narrow<Cast5> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                    BlockPrimitive::Blowfish(c) => $name::Blowfish(
                        <$narrow<Blowfish> as IvStart>::iv_start(c.clone(), iv)
                            .map_err(invalid)?,
                    ),
                };
                Ok(mode)
            }
        }
    };
}

macro_rules! with_keyed {
    ($name:ident, $value:expr, $m:ident => $body:expr) => {
        match $value {
            $name::Aes128($m) => $body,
            $name::Aes192($m) => $body,
            $name::Aes256($m) => $body,
            $name::Des($m) => $body,
            $name::TripleDes($m) => $body,
            $name::Cast($m) => $body,
            $name::Blowfish($m) => $body,
        }
    };
}

keyed_mode!(
    /// Full-block big-endian counter.
    CtrKeystream,
    Ctr128BE,
    Ctr64BE
);
keyed_mode!(OfbKeystream, Ofb, Ofb);
keyed_mode!(CfbEncrypt, BufEncryptor, BufEncryptor);
keyed_mode!(CfbDecrypt, BufDecryptor, BufDecryptor);
keyed_mode!(Cfb8Encrypt, Cfb8Encryptor, Cfb8Encryptor);
keyed_mode!(Cfb8Decrypt, Cfb8Decryptor, Cfb8Decryptor);

/// A running stream-shaped mode. Every input byte yields one output byte.
pub(crate) enum FeedbackMode {
    Ctr(CtrKeystream),
    Ofb(OfbKeystream),
    CfbEncrypt(CfbEncrypt),
    CfbDecrypt(CfbDecrypt),
    Cfb8Encrypt(Cfb8Encrypt),
    Cfb8Decrypt(Cfb8Decrypt),
}

impl FeedbackMode {
    /// Starts `mode` from `primitive`'s key schedule and `iv` (one block long).
    pub(crate) fn start(
        mode: CipherMode,
        operation: Operation,
        primitive: &BlockPrimitive,
        iv: &[u8],
    ) -> Result<Self> {
        let started = match (mode, operation) {
            (CipherMode::Ctr, _) => FeedbackMode::Ctr(CtrKeystream::start(primitive, iv)?),
            (CipherMode::Ofb, _) => FeedbackMode::Ofb(OfbKeystream::start(primitive, iv)?),
            (CipherMode::Cfb, Operation::Encrypt) => {
                FeedbackMode::CfbEncrypt(CfbEncrypt::start(primitive, iv)?)
            }
            (CipherMode::Cfb, Operation::Decrypt) => {
                FeedbackMode::CfbDecrypt(CfbDecrypt::start(primitive, iv)?)
            }
            (CipherMode::Cfb8, Operation::Encrypt) => {
                FeedbackMode::Cfb8Encrypt(Cfb8Encrypt::start(primitive, iv)?)
            }
            (CipherMode::Cfb8, Operation::Decrypt) => {
                FeedbackMode::Cfb8Decrypt(Cfb8Decrypt::start(primitive, iv)?)
            }
            _ => return Err(CryptoError::InvalidParameters),
        };
        Ok(started)
    }

    /// Transforms `data` in place.
    ///
    /// Fails with [`CryptoError::Overflow`], leaving `data` and the mode untouched,
    /// when the CTR counter space cannot cover `data`.
    pub(crate) fn process(&mut self, data: &mut [u8]) -> Result<()> {
        match self {
            FeedbackMode::Ctr(m) => with_keyed!(CtrKeystream, m, c => c.try_apply_keystream(data))
                .map_err(|_| {
                    log::debug!("CTR counter space exhausted");
                    CryptoError::Overflow
                })?,
            FeedbackMode::Ofb(m) => with_keyed!(OfbKeystream, m, c => c.try_apply_keystream(data))
                .map_err(|_| CryptoError::Overflow)?,
            FeedbackMode::CfbEncrypt(m) => with_keyed!(CfbEncrypt, m, c => c.encrypt(data)),
            FeedbackMode::CfbDecrypt(m) => with_keyed!(CfbDecrypt, m, c => c.decrypt(data)),
            FeedbackMode::Cfb8Encrypt(m) => with_keyed!(Cfb8Encrypt, m, c => {
                for byte in data.iter_mut() {
                    c.encrypt_block_mut(GenericArray::from_mut_slice(std::slice::from_mut(byte)));
                }
            }),
            FeedbackMode::Cfb8Decrypt(m) => with_keyed!(Cfb8Decrypt, m, c => {
                for byte in data.iter_mut() {
                    c.decrypt_block_mut(GenericArray::from_mut_slice(std::slice::from_mut(byte)));
                }
            }),
        }
        Ok(())
    }
}
