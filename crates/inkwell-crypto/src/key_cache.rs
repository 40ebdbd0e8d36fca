//! Imported-cipher cache keyed by the configuration value.
//!
//! Importing the key (base64 decode plus AES key schedule) happens
//! once per configuration value instead of once per operation. When
//! the configured value changes (key rotation) the stale cipher is
//! dropped and the new key imported, so new writes always use the key
//! the environment currently supplies.

use tracing::debug;
use zeroize::Zeroize;

use crate::api_key::import_cipher;
use crate::config::EncryptionConfig;
use crate::envelope::ApiKeyCipher;
use crate::error::CryptoError;

/// Single-entry cipher cache.
///
/// One process-wide key means one entry; the cached source string is
/// compared against the config on every lookup.
#[derive(Default)]
pub struct CipherCache {
    entry: Option<(String, ApiKeyCipher)>,
}

impl CipherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cipher for the configured key, importing on first use or
    /// after the configuration value changed.
    pub fn cipher_for(&mut self, config: &EncryptionConfig) -> Result<&ApiKeyCipher, CryptoError> {
        let source = config.encryption_key()?;
        let hit = matches!(&self.entry, Some((cached, _)) if cached.as_str() == source);
        if !hit {
            debug!(rotated = self.entry.is_some(), "importing encryption key");
            let cipher = import_cipher(config)?;
            if let Some((mut stale, _)) = self.entry.take() {
                stale.zeroize();
            }
            self.entry = Some((source.to_owned(), cipher));
        }
        let (_, cipher) = self
            .entry
            .as_ref()
            .expect("entry populated on the miss path above");
        Ok(cipher)
    }
}

impl Drop for CipherCache {
    fn drop(&mut self) {
        // The source string is the base64 form of the key
        if let Some((source, _)) = &mut self.entry {
            source.zeroize();
        }
    }
}
