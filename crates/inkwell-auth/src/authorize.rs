//! OpenRouter authorization URL construction.

use url::form_urlencoded;

/// OpenRouter authorization endpoint. Fixed external contract.
pub const OPENROUTER_AUTH_URL: &str = "https://openrouter.ai/auth";

/// Build the authorization URL the user is redirected to.
///
/// The parameter names (`callback_url`, `code_challenge`,
/// `code_challenge_method`) are part of the OpenRouter contract and
/// must not change. Pure string construction, no network call.
pub fn build_auth_url(
    callback_url: &str,
    code_challenge: &str,
    code_challenge_method: &str,
) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("callback_url", callback_url)
        .append_pair("code_challenge", code_challenge)
        .append_pair("code_challenge_method", code_challenge_method)
        .finish();
    format!("{}?{}", OPENROUTER_AUTH_URL, query)
}
