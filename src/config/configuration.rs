//! src/config/configuration.rs
//! Canonical, validated configuration record consumed by the transform layer.

use crate::aliases::{IvBytes, KeyMaterial};
use crate::config::algorithm::{Algorithm, Mode, Padding};
use crate::consts::{
    AES_KEY_SIZES, BLOCK_SIZE_3DES, BLOCK_SIZE_AES128, BLOCK_SIZE_BLOWFISH, BLOCK_SIZE_CAST,
    BLOCK_SIZE_DES, BLOCK_SIZE_RC4, KEY_SIZE_3DES, KEY_SIZE_DES, KEY_SIZE_MAX_BLOWFISH,
    KEY_SIZE_MAX_CAST, KEY_SIZE_MAX_RC4, KEY_SIZE_MIN_BLOWFISH, KEY_SIZE_MIN_CAST,
    KEY_SIZE_MIN_RC4,
};
use crate::error::{CryptoError, Result};
use crate::utils::ct_eq;
use std::num::NonZeroU32;

/// Algorithm kind, without mode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    Aes,
    Des,
    TripleDes,
    Cast,
    Rc4,
    Blowfish,
}

/// Mode kind, without parameters. `Stream` is only valid for RC4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Ecb,
    Cbc,
    Cfb,
    Ctr,
    Ofb,
    Xts,
    Cfb8,
    Stream,
}

/// Accepted key lengths of an algorithm, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySizes {
    Fixed(usize),
    Discrete(&'static [usize]),
    Range { min: usize, max: usize },
}

impl KeySizes {
    #[must_use]
    pub fn contains(&self, len: usize) -> bool {
        match *self {
            KeySizes::Fixed(size) => len == size,
            KeySizes::Discrete(sizes) => sizes.contains(&len),
            KeySizes::Range { min, max } => (min..=max).contains(&len),
        }
    }
}

impl CipherAlgorithm {
    /// Block size in bytes; `0` for RC4.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        match self {
            CipherAlgorithm::Aes => BLOCK_SIZE_AES128,
            CipherAlgorithm::Des => BLOCK_SIZE_DES,
            CipherAlgorithm::TripleDes => BLOCK_SIZE_3DES,
            CipherAlgorithm::Cast => BLOCK_SIZE_CAST,
            CipherAlgorithm::Rc4 => BLOCK_SIZE_RC4,
            CipherAlgorithm::Blowfish => BLOCK_SIZE_BLOWFISH,
        }
    }

    #[must_use]
    pub const fn key_sizes(&self) -> KeySizes {
        match self {
            CipherAlgorithm::Aes => KeySizes::Discrete(AES_KEY_SIZES),
            CipherAlgorithm::Des => KeySizes::Fixed(KEY_SIZE_DES),
            CipherAlgorithm::TripleDes => KeySizes::Fixed(KEY_SIZE_3DES),
            CipherAlgorithm::Cast => KeySizes::Range {
                min: KEY_SIZE_MIN_CAST,
                max: KEY_SIZE_MAX_CAST,
            },
            CipherAlgorithm::Rc4 => KeySizes::Range {
                min: KEY_SIZE_MIN_RC4,
                max: KEY_SIZE_MAX_RC4,
            },
            CipherAlgorithm::Blowfish => KeySizes::Range {
                min: KEY_SIZE_MIN_BLOWFISH,
                max: KEY_SIZE_MAX_BLOWFISH,
            },
        }
    }

    #[must_use]
    pub const fn is_stream_cipher(&self) -> bool {
        matches!(self, CipherAlgorithm::Rc4)
    }
}

impl CipherMode {
    /// Modes whose configuration carries an IV.
    #[must_use]
    pub const fn uses_iv(&self) -> bool {
        matches!(
            self,
            CipherMode::Cbc
                | CipherMode::Cfb
                | CipherMode::Ctr
                | CipherMode::Ofb
                | CipherMode::Cfb8
        )
    }

    /// Modes that buffer input to whole blocks.
    #[must_use]
    pub const fn is_block_shaped(&self) -> bool {
        matches!(self, CipherMode::Ecb | CipherMode::Cbc | CipherMode::Xts)
    }

    /// Modes for which PKCS7 padding is meaningful.
    #[must_use]
    pub const fn supports_padding(&self) -> bool {
        matches!(self, CipherMode::Ecb | CipherMode::Cbc)
    }
}

/// Canonical configuration for one cryptor.
///
/// Only obtainable through validation ([`TryFrom<Algorithm>`] or
/// [`AlgorithmConfiguration::from_parts`]); read-only afterwards. The IV and the
/// XTS tweak key are held in zeroizing buffers.
#[derive(Clone)]
pub struct AlgorithmConfiguration {
    mode: CipherMode,
    algorithm: CipherAlgorithm,
    padding: Padding,
    iv: Option<IvBytes>,
    tweak: Option<KeyMaterial>,
    rounds: Option<NonZeroU32>,
}

impl AlgorithmConfiguration {
    /// Validates a flat parameter set.
    ///
    /// Rules:
    /// - RC4 requires `CipherMode::Stream`, no IV/tweak/rounds; padding is forced to `None`.
    /// - `CipherMode::Stream` is only valid for RC4.
    /// - XTS is AES-only, requires a tweak, forbids IV and PKCS7.
    /// - CBC/CFB/CTR/OFB/CFB8 require an IV of exactly one block; ECB forbids it.
    /// - CFB8 requires a round count of at least 1; other modes forbid it.
    /// - PKCS7 is normalized to `None` for CFB/CTR/OFB/CFB8.
    ///
    /// Key length is not checked here; that happens when the cryptor is created.
    pub fn from_parts(
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        padding: Padding,
        iv: Option<Vec<u8>>,
        tweak: Option<Vec<u8>>,
        rounds: Option<u32>,
    ) -> Result<Self> {
        Self::build(
            algorithm,
            mode,
            padding,
            iv.map(IvBytes::new),
            tweak.map(KeyMaterial::new),
            rounds,
        )
    }

    fn build(
        algorithm: CipherAlgorithm,
        mode: CipherMode,
        padding: Padding,
        iv: Option<IvBytes>,
        tweak: Option<KeyMaterial>,
        rounds: Option<u32>,
    ) -> Result<Self> {
        let config = Self {
            mode,
            algorithm,
            padding: normalize_padding(algorithm, mode, padding),
            iv,
            tweak,
            rounds: match rounds {
                Some(r) => Some(NonZeroU32::new(r).ok_or(CryptoError::InvalidParameters)?),
                None => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.algorithm.is_stream_cipher() != (self.mode == CipherMode::Stream) {
            log::debug!("{:?} cannot run in {:?} mode", self.algorithm, self.mode);
            return Err(CryptoError::InvalidParameters);
        }

        match (self.mode, &self.iv) {
            (mode, Some(iv)) if mode.uses_iv() => {
                if iv.expose_secret().len() != self.algorithm.block_size() {
                    return Err(CryptoError::InvalidParameters);
                }
            }
            (mode, None) if mode.uses_iv() => return Err(CryptoError::InvalidParameters),
            (_, Some(_)) => return Err(CryptoError::InvalidParameters),
            (_, None) => {}
        }

        match (self.mode, &self.tweak) {
            (CipherMode::Xts, Some(tweak)) => {
                if self.algorithm != CipherAlgorithm::Aes
                    || tweak.expose_secret().is_empty()
                    || self.padding != Padding::None
                {
                    return Err(CryptoError::InvalidParameters);
                }
            }
            (CipherMode::Xts, None) | (_, Some(_)) => return Err(CryptoError::InvalidParameters),
            (_, None) => {}
        }

        match (self.mode, self.rounds) {
            (CipherMode::Cfb8, None) => Err(CryptoError::InvalidParameters),
            (CipherMode::Cfb8, Some(_)) | (_, None) => Ok(()),
            (_, Some(_)) => Err(CryptoError::InvalidParameters),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> CipherMode {
        self.mode
    }

    #[must_use]
    pub const fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    #[must_use]
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_ref().map(|iv| iv.expose_secret().as_slice())
    }

    #[must_use]
    pub fn tweak(&self) -> Option<&[u8]> {
        self.tweak
            .as_ref()
            .map(|tweak| tweak.expose_secret().as_slice())
    }

    #[must_use]
    pub fn rounds(&self) -> Option<u32> {
        self.rounds.map(NonZeroU32::get)
    }

    /// Block size of the configured algorithm (`0` for RC4).
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }
}

fn normalize_padding(algorithm: CipherAlgorithm, mode: CipherMode, padding: Padding) -> Padding {
    // XTS keeps its padding so validation can reject PKCS7 outright.
    if padding == Padding::Pkcs7
        && (algorithm.is_stream_cipher() || !(mode.supports_padding() || mode == CipherMode::Xts))
    {
        log::debug!("{algorithm:?}/{mode:?}: PKCS7 padding has no effect, normalized to None");
        return Padding::None;
    }
    padding
}

impl TryFrom<Algorithm> for AlgorithmConfiguration {
    type Error = CryptoError;

    fn try_from(algorithm: Algorithm) -> Result<Self> {
        let (kind, mode, padding) = match algorithm {
            Algorithm::Rc4 => {
                return Self::build(
                    CipherAlgorithm::Rc4,
                    CipherMode::Stream,
                    Padding::None,
                    None,
                    None,
                    None,
                )
            }
            Algorithm::Aes(mode, padding) => (CipherAlgorithm::Aes, mode, padding),
            Algorithm::Des(mode, padding) => (CipherAlgorithm::Des, mode, padding),
            Algorithm::TripleDes(mode, padding) => (CipherAlgorithm::TripleDes, mode, padding),
            Algorithm::Cast(mode, padding) => (CipherAlgorithm::Cast, mode, padding),
            Algorithm::Blowfish(mode, padding) => (CipherAlgorithm::Blowfish, mode, padding),
        };

        let (mode, iv, tweak, rounds) = match mode {
            Mode::Ecb => (CipherMode::Ecb, None, None, None),
            Mode::Cbc { iv } => (CipherMode::Cbc, Some(iv), None, None),
            Mode::Cfb { iv } => (CipherMode::Cfb, Some(iv), None, None),
            Mode::Ctr { iv } => (CipherMode::Ctr, Some(iv), None, None),
            Mode::Ofb { iv } => (CipherMode::Ofb, Some(iv), None, None),
            Mode::Xts { tweak } => (CipherMode::Xts, None, Some(tweak), None),
            Mode::Cfb8 { iv, rounds } => (CipherMode::Cfb8, Some(iv), None, Some(rounds)),
        };

        Self::build(kind, mode, padding, iv, tweak, rounds)
    }
}

impl PartialEq for AlgorithmConfiguration {
    fn eq(&self, other: &Self) -> bool {
        let secrets_eq = |a: Option<&[u8]>, b: Option<&[u8]>| match (a, b) {
            (Some(a), Some(b)) => ct_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.mode == other.mode
            && self.algorithm == other.algorithm
            && self.padding == other.padding
            && self.rounds == other.rounds
            && secrets_eq(self.iv(), other.iv())
            && secrets_eq(self.tweak(), other.tweak())
    }
}

impl Eq for AlgorithmConfiguration {}

impl TryFrom<&Algorithm> for AlgorithmConfiguration {
    type Error = CryptoError;

    fn try_from(algorithm: &Algorithm) -> Result<Self> {
        Self::try_from(algorithm.clone())
    }
}

// IV and tweak bytes stay out of debug output.
impl std::fmt::Debug for AlgorithmConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmConfiguration")
            .field("mode", &self.mode)
            .field("algorithm", &self.algorithm)
            .field("padding", &self.padding)
            .field("iv", &self.iv.as_ref().map(|_| "<redacted>"))
            .field("tweak", &self.tweak.as_ref().map(|_| "<redacted>"))
            .field("rounds", &self.rounds())
            .finish()
    }
}
