use thiserror::Error;

/// Result alias for transcription option operations
pub type Result<T> = std::result::Result<T, SttError>;

/// Errors raised when converting transcription options to or from the wire form
#[derive(Debug, Error)]
pub enum SttError {
    /// The string is not one of the supported audio format identifiers
    #[error("unsupported audio format: {0:?}")]
    UnsupportedFormat(String),

    /// The payload could not be encoded or decoded
    #[error("invalid transcription payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
