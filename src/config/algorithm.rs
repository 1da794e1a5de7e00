//! src/config/algorithm.rs
//! Caller-level sum types: each mode carries exactly the parameters it accepts.

use crate::aliases::{IvBytes, KeyMaterial};
use crate::consts::DEFAULT_CFB8_ROUNDS;
use crate::utils::ct_eq;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// Padding applied by block-shaped modes (ECB, CBC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    #[default]
    None,
    Pkcs7,
}

/// Block-cipher mode of operation together with its per-mode parameters.
///
/// IVs must be exactly one block of the chosen algorithm. The XTS tweak is the
/// tweak key and must match the data key's length. Both live in zeroizing
/// buffers and compare in constant time.
#[derive(Clone)]
pub enum Mode {
    Ecb,
    Cbc { iv: IvBytes },
    Cfb { iv: IvBytes },
    Ctr { iv: IvBytes },
    Ofb { iv: IvBytes },
    Xts { tweak: KeyMaterial },
    Cfb8 { iv: IvBytes, rounds: u32 },
}

impl Mode {
    /// CFB8 with the default round count.
    #[must_use]
    pub fn cfb8(iv: impl Into<Vec<u8>>) -> Self {
        Self::cfb8_with_rounds(iv, DEFAULT_CFB8_ROUNDS)
    }

    /// CFB8 with an explicit round count; zero is rejected at configuration time.
    #[must_use]
    pub fn cfb8_with_rounds(iv: impl Into<Vec<u8>>, rounds: u32) -> Self {
        Mode::Cfb8 {
            iv: IvBytes::new(iv.into()),
            rounds,
        }
    }

    #[must_use]
    pub fn cbc(iv: impl Into<Vec<u8>>) -> Self {
        Mode::Cbc {
            iv: IvBytes::new(iv.into()),
        }
    }

    #[must_use]
    pub fn cfb(iv: impl Into<Vec<u8>>) -> Self {
        Mode::Cfb {
            iv: IvBytes::new(iv.into()),
        }
    }

    #[must_use]
    pub fn ctr(iv: impl Into<Vec<u8>>) -> Self {
        Mode::Ctr {
            iv: IvBytes::new(iv.into()),
        }
    }

    #[must_use]
    pub fn ofb(iv: impl Into<Vec<u8>>) -> Self {
        Mode::Ofb {
            iv: IvBytes::new(iv.into()),
        }
    }

    #[must_use]
    pub fn xts(tweak: impl Into<Vec<u8>>) -> Self {
        Mode::Xts {
            tweak: KeyMaterial::new(tweak.into()),
        }
    }
}

impl PartialEq for Mode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Mode::Ecb, Mode::Ecb) => true,
            (Mode::Cbc { iv: a }, Mode::Cbc { iv: b })
            | (Mode::Cfb { iv: a }, Mode::Cfb { iv: b })
            | (Mode::Ctr { iv: a }, Mode::Ctr { iv: b })
            | (Mode::Ofb { iv: a }, Mode::Ofb { iv: b })
            | (Mode::Xts { tweak: a }, Mode::Xts { tweak: b }) => {
                ct_eq(a.expose_secret(), b.expose_secret())
            }
            (Mode::Cfb8 { iv: a, rounds: r }, Mode::Cfb8 { iv: b, rounds: s }) => {
                r == s && ct_eq(a.expose_secret(), b.expose_secret())
            }
            _ => false,
        }
    }
}

impl Eq for Mode {}

// IVs and tweaks stay out of debug output.
impl std::fmt::Debug for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Ecb => f.write_str("Ecb"),
            Mode::Cbc { .. } => f.write_str("Cbc"),
            Mode::Cfb { .. } => f.write_str("Cfb"),
            Mode::Ctr { .. } => f.write_str("Ctr"),
            Mode::Ofb { .. } => f.write_str("Ofb"),
            Mode::Xts { .. } => f.write_str("Xts"),
            Mode::Cfb8 { rounds, .. } => f.debug_struct("Cfb8").field("rounds", rounds).finish(),
        }
    }
}

/// Algorithm selection. Block algorithms carry their mode and padding; RC4 is a
/// stream cipher and carries nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Aes(Mode, Padding),
    Des(Mode, Padding),
    TripleDes(Mode, Padding),
    Cast(Mode, Padding),
    Blowfish(Mode, Padding),
    Rc4,
}
