//! src/cryptor/oneshot.rs
//! Stateless one-shot facade: create → size check → update → finalize → release.

use crate::config::{AlgorithmConfiguration, Operation};
use crate::cryptor::engine::Cryptor;
use crate::error::{CryptoError, Result};
use crate::utils::allocate;

/// Transforms all of `input` into `output` in one call, returning the bytes written.
///
/// The worst-case size (`output_length(input.len(), true)`) is checked up front; an
/// undersized `output` fails with [`CryptoError::BufferTooSmall`] before any data is
/// processed. The internal cryptor is released on every exit path.
pub fn crypt(
    operation: Operation,
    configuration: &AlgorithmConfiguration,
    key: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<usize> {
    let mut cryptor = Cryptor::new(operation, configuration, key)?;

    let required = cryptor.output_length(input.len(), true);
    if output.len() < required {
        return Err(CryptoError::BufferTooSmall(required));
    }

    let written = cryptor.update(input, output)?;
    let tail = cryptor.finalize(&mut output[written..])?;
    Ok(written + tail)
}

/// [`crypt`] into a freshly allocated vector sized to the worst case, then truncated.
pub fn crypt_to_vec(
    operation: Operation,
    configuration: &AlgorithmConfiguration,
    key: &[u8],
    input: &[u8],
) -> Result<Vec<u8>> {
    let mut cryptor = Cryptor::new(operation, configuration, key)?;
    let mut output = allocate(cryptor.output_length(input.len(), true))?;

    let written = cryptor.update(input, &mut output)?;
    let tail = cryptor.finalize(&mut output[written..])?;
    output.truncate(written + tail);
    Ok(output)
}
