//! httpjsonrpc-runtime - Tokio hand-off and cancellation primitives
//!
//! This crate provides:
//! - [`CancelHandle`] / [`CancelSignal`] one-way, one-shot cancellation
//! - [`rendezvous`] zero-buffer hand-off between producers and one consumer
//! - [`DeliveryTracker`] for spawning delivery tasks that either hand off or abandon

mod cancel;
mod delivery;
mod rendezvous;

pub use cancel::{CancelHandle, CancelSignal};
pub use delivery::{DeliveryOutcome, DeliveryTracker};
pub use rendezvous::{RendezvousClosed, RendezvousReceiver, RendezvousSender, rendezvous};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CancelHandle, CancelSignal, DeliveryOutcome, DeliveryTracker, RendezvousClosed,
        RendezvousReceiver, RendezvousSender, rendezvous,
    };
}
