//! httpjsonrpc-core - Core types, errors, and the client codec contract
//!
//! This crate provides the foundational types shared by the httpjsonrpc crates:
//! - [`ClientCodec`] trait describing what an RPC client framework drives
//! - [`RequestHeader`] and [`ResponseHeader`] exchanged with the framework
//! - [`CodecError`] for error handling
//! - [`CodecConfig`] for codec configuration

mod codec;
mod config;
mod error;
mod header;

pub use codec::ClientCodec;
pub use config::CodecConfig;
pub use error::{CodecError, CodecResult};
pub use header::{RequestHeader, ResponseHeader};

/// Log levels accepted in configuration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl std::str::FromStr for LogLevel {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(CodecError::Config(format!("unknown log level '{}'", other))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClientCodec, CodecConfig, CodecError, CodecResult, LogLevel, RequestHeader,
        ResponseHeader,
    };
}
