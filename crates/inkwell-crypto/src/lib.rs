//! At-rest protection for third-party AI-provider API keys.
//!
//! The account/provider-connection layer calls [`encrypt_api_key`]
//! before persisting a key and [`decrypt_api_key`] when it needs the
//! plaintext back; [`hash_api_key`] gives a short fingerprint for
//! recognizing a stored key without keeping it in recoverable form.
//! All operations take an explicit [`EncryptionConfig`]; there is no
//! ambient key state.

pub mod api_key;
pub mod base64;
pub mod config;
pub mod envelope;
pub mod error;
pub mod key_cache;
pub mod key_hash;
pub mod types;

pub use api_key::{decrypt_api_key, encrypt_api_key, generate_encryption_key};
pub use base64::{base64_decode, base64_encode, base64url_decode, base64url_encode};
pub use config::{EncryptionConfig, ENCRYPTION_KEY_VAR};
pub use envelope::ApiKeyCipher;
pub use error::CryptoError;
pub use key_cache::CipherCache;
pub use key_hash::hash_api_key;
pub use types::{AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, KEY_HASH_LENGTH};
