//! src/batch_ops.rs
//! Parallel one-shot transforms. Each item gets its own cryptor; nothing is shared.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::config::{AlgorithmConfiguration, Operation};
#[cfg(feature = "batch-ops")]
use crate::crypt_to_vec;
#[cfg(feature = "batch-ops")]
use crate::error::Result;

/// Runs [`crypt_to_vec`] over every input in parallel, preserving order.
///
/// All items share one configuration and key. The first failure is returned.
#[cfg(feature = "batch-ops")]
pub fn crypt_batch<I>(
    operation: Operation,
    configuration: &AlgorithmConfiguration,
    key: &[u8],
    inputs: &[I],
) -> Result<Vec<Vec<u8>>>
where
    I: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|input| crypt_to_vec(operation, configuration, key, input.as_ref()))
        .collect()
}
