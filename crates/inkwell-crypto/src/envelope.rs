//! AES-256-GCM for provider API keys at rest.
//!
//! Envelope layout: [IV:12][ciphertext + tag]
//! A fresh random IV is drawn for every encryption; the tag is
//! verified before any plaintext is returned.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::CryptoError;
use crate::types::{AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH};

/// Generate a random 12-byte IV for AES-GCM.
fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH], CryptoError> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// AES-256-GCM cipher over raw envelope bytes.
///
/// String and config handling lives in [`crate::api_key`]; this type
/// only sees key bytes and envelope bytes.
pub struct ApiKeyCipher {
    cipher: Aes256Gcm,
}

impl std::fmt::Debug for ApiKeyCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCipher").finish_non_exhaustive()
    }
}

impl ApiKeyCipher {
    /// Create a cipher from 32-byte (256-bit) raw key material.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != AES_KEY_LENGTH {
            return Err(CryptoError::InvalidKeyLength {
                expected: AES_KEY_LENGTH,
                got: key.len(),
            });
        }
        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        Ok(Self { cipher })
    }

    /// Encrypt plaintext, returning [IV:12][ciphertext+tag].
    ///
    /// Every call draws a fresh IV, so the same plaintext never
    /// produces the same envelope twice.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let iv = generate_iv()?;
        let nonce = Nonce::from_slice(&iv);
        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut envelope = Vec::with_capacity(iv.len() + ciphertext.len());
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(&ciphertext);
        Ok(envelope)
    }

    /// Decrypt an [IV:12][ciphertext+tag] envelope.
    ///
    /// Fails on any corruption (truncation, bit-flip, wrong key); no
    /// partial plaintext is ever returned.
    pub fn decrypt(&self, envelope: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if envelope.len() < AES_GCM_IV_LENGTH + AES_GCM_TAG_LENGTH {
            return Err(CryptoError::DataTooShort);
        }
        let iv = &envelope[..AES_GCM_IV_LENGTH];
        let ciphertext = &envelope[AES_GCM_IV_LENGTH..];
        let nonce = Nonce::from_slice(iv);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
    }
}
