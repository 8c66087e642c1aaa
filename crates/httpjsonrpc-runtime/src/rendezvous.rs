//! Zero-buffer hand-off between many producers and one consumer
//!
//! A send completes only once the receiver has taken the value. Senders that
//! arrive while another hand-off is pending queue up and are served in order.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// The receiving side is gone; the value was dropped
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rendezvous receiver is gone")]
pub struct RendezvousClosed;

struct Handoff<T> {
    value: T,
    taken: oneshot::Sender<()>,
}

/// Create a connected sender/receiver pair
pub fn rendezvous<T>() -> (RendezvousSender<T>, RendezvousReceiver<T>) {
    // One slot parks the value being offered; the ack makes the send synchronous.
    let (tx, rx) = mpsc::channel(1);
    (RendezvousSender { tx }, RendezvousReceiver { rx })
}

/// Producer half (cloneable)
pub struct RendezvousSender<T> {
    tx: mpsc::Sender<Handoff<T>>,
}

impl<T> Clone for RendezvousSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> RendezvousSender<T> {
    /// Offer a value and wait until the receiver takes it
    ///
    /// If this future is dropped after the value was parked, the receiver may
    /// still take it later.
    pub async fn send(&self, value: T) -> Result<(), RendezvousClosed> {
        let (taken, acked) = oneshot::channel();
        self.tx
            .send(Handoff { value, taken })
            .await
            .map_err(|_| RendezvousClosed)?;
        acked.await.map_err(|_| RendezvousClosed)
    }
}

/// Consumer half
pub struct RendezvousReceiver<T> {
    rx: mpsc::Receiver<Handoff<T>>,
}

impl<T> RendezvousReceiver<T> {
    /// Take the next offered value
    ///
    /// Returns `None` once every sender is gone. Cancel safe.
    pub async fn recv(&mut self) -> Option<T> {
        let handoff = self.rx.recv().await?;
        // The sender may have given up waiting; the value is still ours.
        let _ = handoff.taken.send(());
        Some(handoff.value)
    }
}
