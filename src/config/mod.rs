// src/config/mod.rs

//! Algorithm configuration.
//!
//! Caller-facing sum types ([`Algorithm`], [`Mode`], [`Padding`], [`Operation`]) and the
//! canonical [`AlgorithmConfiguration`] record they normalize into.

pub(crate) mod algorithm;
pub(crate) mod configuration;

pub use algorithm::{Algorithm, Mode, Operation, Padding};
pub use configuration::{AlgorithmConfiguration, CipherAlgorithm, CipherMode, KeySizes};
