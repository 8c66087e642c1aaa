//! httpjsonrpc-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a formatted subscriber with a reloadable level
//! - [`ReloadHandle`] for changing the level at runtime

mod layer;
mod reload;

pub use httpjsonrpc_core::LogLevel;
pub use layer::init_logging;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
