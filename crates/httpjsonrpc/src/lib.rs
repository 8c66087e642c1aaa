//! # httpjsonrpc
//!
//! A client-side transport codec that lets a request/response RPC client framework
//! talk to a server over HTTP using JSON envelopes.
//!
//! The framework writes calls concurrently and drains replies with one sequential
//! reader. Each [`HttpCodec::write_request`](ClientCodec::write_request) performs its
//! own HTTP POST; the decoded reply is then handed to the reader through a zero-buffer
//! rendezvous by a spawned delivery task, or dropped if the codec is closed first.
//!
//! ## Wire format
//!
//! ```text
//! POST <endpoint>   Content-Type: application/json
//! {"method": "Arith.Multiply", "params": [{"a": 7, "b": 6}], "id": 1}
//!
//! 200 OK
//! {"id": 1, "result": 42, "error": null}
//! ```
//!
//! Any status outside 2xx fails the write with [`CodecError::Protocol`].
//!
//! ## Usage
//!
//! ```ignore
//! use httpjsonrpc::prelude::*;
//!
//! let config = CodecConfig::from_toml(&std::fs::read_to_string("rpc.toml")?)?;
//! init_logging(config.log_level()?);
//!
//! let mut codec = HttpCodec::from_config(&config)?;
//! let writer = codec.clone();
//! tokio::spawn(async move {
//!     writer
//!         .write_request(&RequestHeader::new("Arith.Multiply", 1), &Args { a: 7, b: 6 })
//!         .await
//! });
//!
//! let header = codec.read_response_header().await?;
//! let mut product = 0i64;
//! codec.read_response_body(Some(&mut product)).await?;
//! codec.close()?;
//! ```
//!
//! Replies arrive in completion order; match them to calls by `seq`.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`httpjsonrpc_core`] - Errors, configuration, headers, and the [`ClientCodec`] trait
//! - [`httpjsonrpc_transport`] - Wire envelopes and the JSON codec
//! - [`httpjsonrpc_runtime`] - Cancellation, rendezvous, and delivery tasks
//! - [`httpjsonrpc_logging`] - Subscriber setup

mod http_codec;

pub use http_codec::HttpCodec;

// Re-export core types
pub use httpjsonrpc_core::{
    ClientCodec, CodecConfig, CodecError, CodecResult, LogLevel, RequestHeader, ResponseHeader,
};

// Re-export wire types
pub use httpjsonrpc_transport::{RequestEnvelope, ResponseEnvelope, ServerError};

// Re-export logging setup
pub use httpjsonrpc_logging::{ReloadHandle, init_logging};

// Re-export common dependencies that callers need
pub use async_trait::async_trait;
pub use reqwest;
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports.
///
/// Use `use httpjsonrpc::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        ClientCodec, CodecConfig, CodecError, CodecResult, HttpCodec, LogLevel, RequestHeader,
        ResponseHeader, init_logging,
    };

    // Serde derives (commonly needed for params and results)
    pub use serde::{Deserialize, Serialize};
}
