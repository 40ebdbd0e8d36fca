//! Encrypt, decrypt, and generate keys at the configuration level.
//!
//! Stored envelope text format: base64([IV:12][ciphertext+tag]).
//! This exact layout matches every envelope already at rest, so it
//! must not change.

use zeroize::Zeroize;

use crate::base64::{base64_decode, base64_encode};
use crate::config::EncryptionConfig;
use crate::envelope::ApiKeyCipher;
use crate::error::CryptoError;
use crate::types::AES_KEY_LENGTH;

/// Decode the configured key and import it into a cipher.
pub(crate) fn import_cipher(config: &EncryptionConfig) -> Result<ApiKeyCipher, CryptoError> {
    let encoded = config.encryption_key()?;
    let mut key =
        base64_decode(encoded).map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))?;
    let cipher = ApiKeyCipher::new(&key);
    key.zeroize();
    cipher
}

/// Encrypt a provider API key for storage.
///
/// Fails with [`CryptoError::MissingEncryptionKey`] before any
/// cryptographic work when the config carries no key.
pub fn encrypt_api_key(plaintext: &str, config: &EncryptionConfig) -> Result<String, CryptoError> {
    let cipher = import_cipher(config)?;
    let envelope = cipher.encrypt(plaintext.as_bytes())?;
    Ok(base64_encode(&envelope))
}

/// Decrypt a stored envelope back to the provider API key.
///
/// A failure here means the plaintext cannot be recovered (corrupted
/// envelope or rotated key); callers should prompt for the key again
/// rather than retry.
pub fn decrypt_api_key(envelope: &str, config: &EncryptionConfig) -> Result<String, CryptoError> {
    let cipher = import_cipher(config)?;
    let raw = base64_decode(envelope).map_err(|e| CryptoError::InvalidEnvelope(e.to_string()))?;
    let plaintext = cipher.decrypt(&raw)?;
    String::from_utf8(plaintext).map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
}

/// Generate a fresh random 256-bit key, exported as base64.
///
/// One-time setup operation: the output becomes the `ENCRYPTION_KEY`
/// the service is deployed with. Never called on the request path.
pub fn generate_encryption_key() -> Result<String, CryptoError> {
    let mut key = [0u8; AES_KEY_LENGTH];
    getrandom::getrandom(&mut key).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    let encoded = base64_encode(&key);
    key.zeroize();
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EncryptionConfig {
        EncryptionConfig::new(generate_encryption_key().unwrap())
    }

    #[test]
    fn round_trip() {
        let config = test_config();
        let envelope = encrypt_api_key("sk-or-v1-abcdef0123456789", &config).unwrap();
        let decrypted = decrypt_api_key(&envelope, &config).unwrap();
        assert_eq!(decrypted, "sk-or-v1-abcdef0123456789");
    }

    #[test]
    fn same_plaintext_different_envelopes() {
        let config = test_config();
        let env1 = encrypt_api_key("same key", &config).unwrap();
        let env2 = encrypt_api_key("same key", &config).unwrap();
        assert_ne!(env1, env2);
        assert_eq!(decrypt_api_key(&env1, &config).unwrap(), "same key");
        assert_eq!(decrypt_api_key(&env2, &config).unwrap(), "same key");
    }

    #[test]
    fn missing_key_fails_before_crypto() {
        let config = EncryptionConfig::default();
        let err = encrypt_api_key("plaintext", &config).unwrap_err();
        assert!(matches!(err, CryptoError::MissingEncryptionKey));
        let err = decrypt_api_key("QUJDRA==", &config).unwrap_err();
        assert!(matches!(err, CryptoError::MissingEncryptionKey));
    }

    #[test]
    fn non_base64_config_key_fails() {
        let config = EncryptionConfig::new("not base64!!");
        let err = encrypt_api_key("plaintext", &config).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKeyEncoding(_)));
    }

    #[test]
    fn wrong_length_config_key_fails() {
        // 16 bytes instead of 32
        let config = EncryptionConfig::new(base64_encode(&[7u8; 16]));
        let err = encrypt_api_key("plaintext", &config).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKeyLength { .. }));
    }

    #[test]
    fn tampered_envelope_fails() {
        let config = test_config();
        let envelope = encrypt_api_key("secret", &config).unwrap();
        let mut raw = base64_decode(&envelope).unwrap();
        let mid = raw.len() / 2;
        raw[mid] ^= 0xff;
        let err = decrypt_api_key(&base64_encode(&raw), &config).unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed(_)));
    }

    #[test]
    fn wrong_key_fails() {
        let envelope = encrypt_api_key("secret", &test_config()).unwrap();
        let err = decrypt_api_key(&envelope, &test_config()).unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed(_)));
    }

    #[test]
    fn non_base64_envelope_fails() {
        let config = test_config();
        let err = decrypt_api_key("%%% not an envelope %%%", &config).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidEnvelope(_)));
    }

    #[test]
    fn generated_key_decodes_to_256_bits() {
        let key = generate_encryption_key().unwrap();
        assert_eq!(base64_decode(&key).unwrap().len(), AES_KEY_LENGTH);
    }

    #[test]
    fn generated_keys_are_unique() {
        let k1 = generate_encryption_key().unwrap();
        let k2 = generate_encryption_key().unwrap();
        assert_ne!(k1, k2);
    }
}
