//! Error types for the HTTP JSON-RPC codec

use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Request envelope could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Network or connection failure during the HTTP round trip
    #[error("transport error: {0}")]
    Transport(String),

    /// HTTP status outside the 2xx range
    #[error("request failed: {status}")]
    Protocol { status: String },

    /// Malformed response body, or a result that does not fit the destination
    #[error("decode error: {0}")]
    Decode(String),

    /// The server reported an error message for a call
    #[error("{0}")]
    Remote(String),

    /// The server's error field is present but is not a string
    #[error("invalid error {error}")]
    InvalidErrorShape {
        service_method: String,
        seq: u64,
        error: serde_json::Value,
    },

    /// The codec was closed; no further replies will be delivered
    #[error("codec is closed")]
    Closed,

    /// A body read was attempted without a preceding header read
    #[error("no response header has been read")]
    NoResponse,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl CodecError {
    /// Whether the failure happened below the HTTP layer and might succeed if reissued.
    ///
    /// The codec never retries; this is for callers that implement their own policy.
    pub fn is_transient(&self) -> bool {
        matches!(self, CodecError::Transport(_))
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Serialization(err.to_string())
    }
}
