//! Account connection to OpenRouter via OAuth 2.0 authorization code
//! with PKCE (RFC 7636).
//!
//! This crate generates the PKCE parameters and the authorization URL.
//! Redirects, token exchange, and session storage of the verifier stay
//! with the caller.

mod authorize;
mod error;
mod pkce;

pub use authorize::{build_auth_url, OPENROUTER_AUTH_URL};
pub use error::AuthError;
pub use pkce::{
    compute_code_challenge, generate_code_verifier, generate_pkce_params, generate_state,
    PkceParams, CODE_CHALLENGE_METHOD,
};
