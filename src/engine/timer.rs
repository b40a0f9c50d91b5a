//! Cancellable one-shot timer that posts an event to its owner.
//!
//! The waiting thread never touches calculator state. When its delay elapses
//! it sends the armed event on the owner's channel and exits; the owner
//! applies it on its own thread. Re-arming drops the previous cancel handle,
//! which wakes and ends the old waiter, so at most one expiry is pending.
//! Dropping the timer cancels it the same way.

use flume::{RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// One-shot timer delivering `E` on a channel.
pub struct ExpiryTimer<E> {
    events: Sender<E>,
    pending: Option<Sender<()>>,
}

impl<E: Send + 'static> ExpiryTimer<E> {
    /// Create a timer posting to `events`.
    pub fn new(events: Sender<E>) -> Self {
        Self { events, pending: None }
    }

    /// Schedule `event` after `delay`, cancelling anything scheduled before.
    pub fn arm(&mut self, delay: Duration, event: E) {
        self.cancel();

        let (cancel_tx, cancel_rx) = flume::bounded::<()>(1);
        let events = self.events.clone();

        let spawned = thread::Builder::new()
            .name("deskcalc-expiry".into())
            .spawn(move || match cancel_rx.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) => {
                    debug!(?delay, "expiry elapsed");
                    // The owner may already be gone
                    let _ = events.send(event);
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!("expiry cancelled");
                }
            });

        match spawned {
            Ok(_) => self.pending = Some(cancel_tx),
            Err(e) => warn!(error = %e, "failed to start expiry timer"),
        }
    }

    /// Cancel the pending expiry, if any.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.pending.take() {
            // Dropping the sender disconnects the waiter; the send just wakes it sooner
            let _ = cancel.try_send(());
        }
    }
}
