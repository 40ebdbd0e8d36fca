use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
