//! Delivery tasks that hand a value to the reader or abandon it on cancellation

use crate::{CancelSignal, RendezvousSender};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// How a delivery task finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The reader took the value
    Delivered,
    /// Cancellation fired, or the reader went away, before the hand-off
    Abandoned,
}

/// Spawns delivery tasks and keeps count of the ones still running
#[derive(Debug, Clone, Default)]
pub struct DeliveryTracker {
    pending: Arc<AtomicUsize>,
    spawned: Arc<AtomicU64>,
}

impl DeliveryTracker {
    /// Create a new tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delivery tasks that have not finished yet
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Total number of delivery tasks spawned
    pub fn spawned(&self) -> u64 {
        self.spawned.load(Ordering::SeqCst)
    }

    /// Spawn a task that offers `value` to `sender`, racing `cancel`
    ///
    /// Must be called from within a Tokio runtime. A task that starts after the
    /// signal has fired never offers its value. Once offered, a value the reader
    /// has already taken counts as delivered even if the signal fires before the
    /// task observes the acknowledgement.
    pub fn spawn<T>(
        &self,
        sender: RendezvousSender<T>,
        mut cancel: CancelSignal,
        value: T,
    ) -> tokio::task::JoinHandle<DeliveryOutcome>
    where
        T: Send + 'static,
    {
        let guard = PendingGuard::enter(self.pending.clone());
        let id = self.spawned.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            let _guard = guard;
            let outcome = if cancel.is_triggered() {
                DeliveryOutcome::Abandoned
            } else {
                tokio::select! {
                    biased;
                    sent = sender.send(value) => match sent {
                        Ok(()) => DeliveryOutcome::Delivered,
                        Err(_) => DeliveryOutcome::Abandoned,
                    },
                    _ = cancel.cancelled() => DeliveryOutcome::Abandoned,
                }
            };
            tracing::trace!(delivery = id, ?outcome, "delivery task finished");
            outcome
        })
    }
}

/// Decrements the pending count when the task ends, however it ends
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn enter(pending: Arc<AtomicUsize>) -> Self {
        pending.fetch_add(1, Ordering::SeqCst);
        Self(pending)
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
