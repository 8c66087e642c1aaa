//! httpjsonrpc-transport - JSON wire envelopes and codec
//!
//! This crate provides:
//! - [`JsonCodec`] for encoding request bodies and decoding response bodies
//! - [`RequestEnvelope`] and [`ResponseEnvelope`] for the wire format
//! - [`ServerError`] classification of the free-form `error` field
//! - [`ReceivedResponse`] pairing a decoded reply with its originating method

mod codec;
mod envelope;

pub use codec::{CONTENT_TYPE, JsonCodec};
pub use envelope::{ReceivedResponse, RequestEnvelope, ResponseEnvelope, ServerError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CONTENT_TYPE, JsonCodec, ReceivedResponse, RequestEnvelope, ResponseEnvelope, ServerError,
    };
}
