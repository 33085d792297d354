//! Trailing-edge debounce
//!
//! Delays an action until a quiet period with no new triggers has elapsed.
//! Rearming aborts the previously scheduled task, so a burst of triggers
//! collapses to one action after the burst ends.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// A cancellable scheduled task with a fixed quiet period
///
/// Methods take `&mut self`: all triggers come from the single event task
/// that owns the session, so no lock is needed around the pending handle.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the quiet period, superseding any
    /// previously scheduled action
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action.await;
        }));
    }

    /// Drop the scheduled action, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
