//! JSON codec for request and response bodies

use crate::{RequestEnvelope, ResponseEnvelope};
use httpjsonrpc_core::{CodecError, CodecResult};
use serde::{Serialize, de::DeserializeOwned};

/// Content type of every request body
pub const CONTENT_TYPE: &str = "application/json";

/// JSON codec implementation using serde_json
///
/// Output is always compact.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }

    /// Encode a value to bytes
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Decode bytes to a value
    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> CodecResult<T> {
        serde_json::from_slice(data).map_err(|e| CodecError::Decode(e.to_string()))
    }

    /// Build and encode the request body for one call
    pub fn encode_request<P: Serialize + ?Sized>(
        &self,
        method: &str,
        id: u64,
        params: &P,
    ) -> CodecResult<Vec<u8>> {
        let envelope = RequestEnvelope::from_typed(method, id, params)?;
        self.encode(&envelope)
    }

    /// Decode a response body
    pub fn decode_response(&self, data: &[u8]) -> CodecResult<ResponseEnvelope> {
        self.decode(data)
    }

    /// Get the content type for this codec
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}

#[cfg(test)]
#[path = "codec/codec_tests.rs"]
mod codec_tests;
