// src/cryptor/mod.rs

//! Cryptor engine and one-shot facade.
//!
//! Core API: [`Cryptor`] for incremental processing, [`crypt`] when everything is in memory.

pub(crate) mod engine;
pub(crate) mod oneshot;

pub use engine::Cryptor;
pub use oneshot::{crypt, crypt_to_vec};
