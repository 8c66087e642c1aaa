//! One-way cancellation signal

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Handle for triggering cancellation
#[derive(Clone)]
pub struct CancelHandle {
    triggered: Arc<AtomicBool>,
    sender: broadcast::Sender<()>,
}

impl CancelHandle {
    /// Create a new, untriggered cancel handle
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            triggered: Arc::new(AtomicBool::new(false)),
            sender,
        }
    }

    /// Trigger cancellation
    ///
    /// Returns `true` only for the call that performed the open→closed transition.
    pub fn trigger(&self) -> bool {
        if self.triggered.swap(true, Ordering::SeqCst) {
            return false;
        }
        // No receivers is fine: late subscribers observe the flag.
        let _ = self.sender.send(());
        true
    }

    /// Check if cancellation has been triggered
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Get a signal that can be passed to tasks
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            triggered: self.triggered.clone(),
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal for detecting cancellation (cloneable, can be passed to tasks)
pub struct CancelSignal {
    triggered: Arc<AtomicBool>,
    receiver: broadcast::Receiver<()>,
}

impl CancelSignal {
    /// Check if cancellation has been triggered (non-blocking)
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Wait for cancellation to be triggered
    ///
    /// Returns immediately if already triggered. Also returns once every
    /// [`CancelHandle`] has been dropped, since nothing can trigger it anymore.
    pub async fn cancelled(&mut self) {
        if self.is_triggered() {
            return;
        }
        let _ = self.receiver.recv().await;
    }
}

impl Clone for CancelSignal {
    fn clone(&self) -> Self {
        Self {
            triggered: self.triggered.clone(),
            receiver: self.receiver.resubscribe(),
        }
    }
}
