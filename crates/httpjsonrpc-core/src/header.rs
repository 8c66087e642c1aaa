//! Request and response header types exchanged with the RPC framework

use crate::CodecError;
use serde::{Deserialize, Serialize};

/// Header of an outbound call, supplied by the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    /// Method being invoked (e.g., "Arith.Multiply")
    pub service_method: String,
    /// Framework-assigned sequence number, carried through opaquely
    pub seq: u64,
}

impl RequestHeader {
    /// Create a new request header
    pub fn new(service_method: impl Into<String>, seq: u64) -> Self {
        Self {
            service_method: service_method.into(),
            seq,
        }
    }
}

/// Header of a completed reply, produced by a header read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Method of the originating call
    pub service_method: String,
    /// Sequence number echoed by the server
    pub seq: u64,
    /// Error message reported by the server, if any
    pub error: Option<String>,
}

impl ResponseHeader {
    /// Create a header for a successful reply
    pub fn new(service_method: impl Into<String>, seq: u64) -> Self {
        Self {
            service_method: service_method.into(),
            seq,
            error: None,
        }
    }

    /// Set the server-reported error message
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Check if the server reported success
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Server-reported error as a [`CodecError::Remote`]
    pub fn remote_error(&self) -> Option<CodecError> {
        self.error.clone().map(CodecError::Remote)
    }
}
