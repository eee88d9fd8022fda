use thiserror::Error;

/// Failure while producing or submitting a share payload.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("failed to serialize menu: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to compress menu: {0}")]
    Deflate(#[from] std::io::Error),

    #[error("share endpoint request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("share endpoint returned status {0}")]
    Endpoint(reqwest::StatusCode),
}

/// A malformed or corrupted share payload. Every decode stage folds
/// into this one error so callers can fall back to generating a fresh
/// schedule instead of crashing.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("payload is not valid url-safe base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload failed to decompress: {0}")]
    Inflate(#[from] std::io::Error),

    #[error("payload is not a well-formed menu: {0}")]
    Menu(#[from] serde_json::Error),
}
