//! PKCE (RFC 7636) parameters for the authorization-code flow.

use inkwell_crypto::base64url_encode;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Challenge method sent to the authorization endpoint.
pub const CODE_CHALLENGE_METHOD: &str = "S256";

/// Generate a cryptographically random code verifier (43 characters).
///
/// Produces 32 random bytes encoded as base64url, landing at the low
/// end of the RFC's 43-128 character range.
pub fn generate_code_verifier() -> Result<String, AuthError> {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| AuthError::RngFailed(e.to_string()))?;
    Ok(base64url_encode(&bytes))
}

/// Generate a code challenge from a verifier using SHA-256.
///
/// `challenge = base64url(SHA-256(verifier))`
pub fn compute_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    base64url_encode(&hash)
}

/// Generate a cryptographically random state parameter (22 characters).
///
/// Produces 16 random bytes encoded as base64url.
pub fn generate_state() -> Result<String, AuthError> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| AuthError::RngFailed(e.to_string()))?;
    Ok(base64url_encode(&bytes))
}

/// PKCE parameters for one authorization attempt.
///
/// The caller keeps the verifier in session state until the token
/// exchange, then discards it. The verifier must never be logged or
/// sent anywhere except the token-exchange endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PkceParams {
    pub code_verifier: String,
    pub code_challenge: String,
    pub code_challenge_method: &'static str,
}

/// Generate a fresh verifier/challenge pair with the S256 method.
pub fn generate_pkce_params() -> Result<PkceParams, AuthError> {
    let code_verifier = generate_code_verifier()?;
    let code_challenge = compute_code_challenge(&code_verifier);
    Ok(PkceParams {
        code_verifier,
        code_challenge,
        code_challenge_method: CODE_CHALLENGE_METHOD,
    })
}
