//! Request and response envelope types for the HTTP wire format
//!
//! Request body: `{"method": <string>, "params": [<value>], "id": <u64>}`
//!
//! Response body: `{"id": <u64>, "result": <value|null>, "error": <value|null>}`

use httpjsonrpc_core::{CodecError, CodecResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Request envelope for one outbound call
///
/// Params are always wrapped in a single-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Method being invoked
    pub method: String,

    /// Call parameter, as a one-element array
    pub params: [serde_json::Value; 1],

    /// Sequence number assigned by the framework
    pub id: u64,
}

impl RequestEnvelope {
    /// Create a new request envelope
    pub fn new(method: impl Into<String>, id: u64, params: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            params: [params],
            id,
        }
    }

    /// Create from method, sequence number, and a serializable parameter
    pub fn from_typed<P: Serialize + ?Sized>(
        method: impl Into<String>,
        id: u64,
        params: &P,
    ) -> CodecResult<Self> {
        Ok(Self::new(method, id, serde_json::to_value(params)?))
    }

    /// The single call parameter
    pub fn param(&self) -> &serde_json::Value {
        &self.params[0]
    }
}

/// Response envelope decoded from an HTTP response body
///
/// Missing fields decode as zero / absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Sequence number echoed by the server
    #[serde(default)]
    pub id: u64,

    /// Call result; `None` when absent or null
    #[serde(default)]
    pub result: Option<serde_json::Value>,

    /// Error of unconstrained shape; `None` when absent or null
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Create a success response
    pub fn success(id: u64, result: serde_json::Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response with a string message
    pub fn error(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(serde_json::Value::String(message.into())),
        }
    }

    /// Classify the error field
    pub fn server_error(&self) -> ServerError {
        ServerError::classify(self.error.as_ref())
    }

    /// Whether this reply must be surfaced as an error rather than a result
    ///
    /// True when any error value is present, or when there is no result at all.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.result.is_none()
    }

    /// Decode the result into a typed value
    ///
    /// An absent result is decoded as JSON `null`.
    pub fn result_as<T: DeserializeOwned>(&self) -> CodecResult<T> {
        let result = match &self.result {
            Some(value) => T::deserialize(value),
            None => T::deserialize(&serde_json::Value::Null),
        };
        result.map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// Classified form of the response `error` field
#[derive(Debug, Clone, PartialEq)]
pub enum ServerError {
    /// No error value (absent or null)
    Absent,
    /// A string message, possibly empty
    Message(String),
    /// Any other JSON value
    Malformed(serde_json::Value),
}

impl ServerError {
    /// Literal substituted for an empty error message
    pub const UNSPECIFIED: &'static str = "unspecified error";

    /// Classify a raw error value
    pub fn classify(value: Option<&serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => ServerError::Absent,
            Some(serde_json::Value::String(message)) => ServerError::Message(message.clone()),
            Some(other) => ServerError::Malformed(other.clone()),
        }
    }

    /// Message to report to the framework, or the offending value if there is none
    ///
    /// Empty messages become [`ServerError::UNSPECIFIED`].
    pub fn into_message(self) -> Result<String, serde_json::Value> {
        match self {
            ServerError::Message(message) if message.is_empty() => {
                Ok(Self::UNSPECIFIED.to_string())
            }
            ServerError::Message(message) => Ok(message),
            ServerError::Absent => Err(serde_json::Value::Null),
            ServerError::Malformed(value) => Err(value),
        }
    }
}

/// A decoded reply waiting to be handed to the reader
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedResponse {
    /// Method of the originating call
    pub service_method: String,
    /// Decoded response envelope
    pub response: ResponseEnvelope,
}

impl ReceivedResponse {
    pub fn new(service_method: impl Into<String>, response: ResponseEnvelope) -> Self {
        Self {
            service_method: service_method.into(),
            response,
        }
    }
}
