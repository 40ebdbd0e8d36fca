//! Runtime configuration for the encryption service.
//!
//! The key is threaded into every operation explicitly rather than
//! read from ambient globals, so the service stays testable and free
//! of hidden state.

use serde::Deserialize;

use crate::error::CryptoError;

/// Environment variable holding the base64-encoded 256-bit key.
pub const ENCRYPTION_KEY_VAR: &str = "ENCRYPTION_KEY";

/// Configuration supplied by the hosting environment.
///
/// The key is optional at the type level: a deployment without one
/// can still serve everything except encrypt/decrypt, which report
/// [`CryptoError::MissingEncryptionKey`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncryptionConfig {
    /// Base64-encoded 256-bit AES key.
    pub encryption_key: Option<String>,
}

impl EncryptionConfig {
    pub fn new(encryption_key: impl Into<String>) -> Self {
        Self {
            encryption_key: Some(encryption_key.into()),
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            encryption_key: std::env::var(ENCRYPTION_KEY_VAR).ok(),
        }
    }

    /// The configured key, or the configuration-category error.
    pub fn encryption_key(&self) -> Result<&str, CryptoError> {
        self.encryption_key
            .as_deref()
            .ok_or(CryptoError::MissingEncryptionKey)
    }
}
