//! Truncated fingerprint for recognizing a previously stored API key.

use sha2::{Digest, Sha256};

use crate::base64::base64_encode;
use crate::types::KEY_HASH_LENGTH;

/// Fingerprint of an API key: first 16 characters of
/// base64(SHA-256(key)).
///
/// Identification only: the truncation means collisions are possible
/// and acceptable for a display/lookup hint. Never use this as a
/// uniqueness or access-control check.
pub fn hash_api_key(plaintext: &str) -> String {
    let digest = Sha256::digest(plaintext.as_bytes());
    let mut encoded = base64_encode(&digest);
    encoded.truncate(KEY_HASH_LENGTH);
    encoded
}
