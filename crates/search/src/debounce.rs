//! Cancellable single-slot timer for keystroke coalescing.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay between the last keystroke and the search request it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// A one-slot debouncer: scheduling a new delayed action invalidates any
/// previously scheduled one, so the latest keystroke always wins and at most
/// one action is ever live.
///
/// One `Debouncer` serves one logical key (the search box). Must be used from
/// within a tokio runtime; the pending action is aborted when the debouncer
/// is dropped.
#[derive(Debug)]
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

    /// Debouncer preconfigured with the search-box delay.
    pub fn for_search() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action` to run after the configured delay, cancelling any
    /// action scheduled earlier that has not yet fired.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
        tracing::trace!(delay_ms = delay.as_millis() as u64, "debounced action scheduled");
    }

    /// Drop the pending action, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an action is scheduled and has not yet run to completion.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
