//! Global subscriber installation

use crate::reload::{ReloadHandle, convert_level_to_filter};
use httpjsonrpc_core::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

/// Install a global formatted subscriber at `level`
///
/// Returns `false` if a global subscriber was already set, in which case
/// nothing changes. Use [`ReloadHandle::global`] to adjust the level later.
pub fn init_logging(level: LogLevel) -> bool {
    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    // Try to set as global default (ignore error if already set)
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle);
    true
}
