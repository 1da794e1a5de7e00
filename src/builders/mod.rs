//! # Builders
//!
//! This module provides builder patterns for constructing cryptors.
//!
//! ## Modules
//!
//! - [`cryptor_builder`] - Fluent construction of a [`Cryptor`](crate::Cryptor)
//!
//! ## Usage
//!
//! Builders collect the operation, algorithm and key in any order and validate
//! everything once, at [`build`](cryptor_builder::CryptorBuilder::build).

pub mod cryptor_builder;
