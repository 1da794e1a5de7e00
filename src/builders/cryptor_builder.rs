//! src/builders/cryptor_builder.rs
//! Fluent cryptor construction; the key is held in a zeroizing buffer until `build`.

use crate::aliases::KeyMaterial;
use crate::config::{Algorithm, AlgorithmConfiguration, Operation};
use crate::cryptor::Cryptor;
use crate::error::{CryptoError, Result};

/// Cryptor builder
///
/// ```
/// use cryptor_rs::{Algorithm, CryptorBuilder, Mode, Padding};
///
/// let cryptor = CryptorBuilder::encrypt()
///     .with_algorithm(Algorithm::Aes(Mode::cbc([0u8; 16]), Padding::Pkcs7))
///     .with_key(b"YELLOW SUBMARINE")
///     .build()
///     .unwrap();
/// assert_eq!(cryptor.output_length(16, true), 32);
/// ```
pub struct CryptorBuilder {
    operation: Operation,
    algorithm: Option<Algorithm>,
    key: Option<KeyMaterial>,
}

impl CryptorBuilder {
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            algorithm: None,
            key: None,
        }
    }

    #[must_use]
    pub fn encrypt() -> Self {
        Self::new(Operation::Encrypt)
    }

    #[must_use]
    pub fn decrypt() -> Self {
        Self::new(Operation::Decrypt)
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Copies `key` into a zeroize-on-drop buffer.
    #[must_use]
    pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key = Some(KeyMaterial::new(key.as_ref().to_vec()));
        self
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Validates everything and keys the cryptor.
    ///
    /// A missing algorithm or key is [`CryptoError::InvalidParameters`].
    pub fn build(self) -> Result<Cryptor> {
        let algorithm = self.algorithm.ok_or(CryptoError::InvalidParameters)?;
        let key = self.key.ok_or(CryptoError::InvalidParameters)?;
        let configuration = AlgorithmConfiguration::try_from(algorithm)?;
        Cryptor::new(self.operation, &configuration, key.expose_secret())
    }
}
