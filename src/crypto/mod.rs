// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! Block primitives, the feedback modes built on them and the RC4 keystream are
//! crate-internal; the random source is public and re-exported at the crate root.

pub(crate) mod feedback;
pub(crate) mod primitive;
pub(crate) mod rc4;
pub mod rng;
