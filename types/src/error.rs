//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while constructing the fundamental types.
#[derive(Debug, Error)]
pub enum TypesError {
    #[error("provider identifier must not be blank")]
    BlankProviderId,

    #[error("application credential {0} must not be blank")]
    BlankCredential(&'static str),

    #[error("invalid secrets file: {0}")]
    InvalidSecrets(String),
}
