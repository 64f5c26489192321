use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid bridge URL {0:?}")]
    InvalidUrl(String),

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}
