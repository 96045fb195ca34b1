//! Hook traits for prefetch lifecycle events.
//!
//! Hooks observe what the prefetcher does without changing it. They are the
//! only place a failed prefetch becomes visible.

use std::pin::pin;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use crate::data::PrefetchEvent;

/// Hook trait for prefetch lifecycle events.
///
/// `on_event` runs inline: skip and dispatch events on the caller's task,
/// completion and failure events inside the detached prefetch task. Keep it
/// cheap and non-blocking.
pub trait PrefetchHook: Send + Sync {
    /// Name of this hook for logging.
    fn name(&self) -> &'static str;

    fn on_event(&self, _event: &PrefetchEvent) {}
}

/// Hook that keeps every event and can wake waiters as tasks finish.
///
/// Useful for observing detached prefetches from tests or from a caller
/// that wants a summary.
#[derive(Debug, Default)]
pub struct RecordingHook {
    events: Mutex<Vec<PrefetchEvent>>,
    notify: Notify,
}

impl RecordingHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of events in delivery order.
    pub fn events(&self) -> Vec<PrefetchEvent> {
        self.lock().clone()
    }

    /// Number of completed or failed tasks seen so far.
    pub fn terminal_count(&self) -> usize {
        self.lock().iter().filter(|e| e.is_terminal()).count()
    }

    /// Wait until at least `count` tasks have completed or failed.
    pub async fn wait_for_terminal(&self, count: usize) {
        loop {
            let mut notified = pin!(self.notify.notified());
            notified.as_mut().enable();

            if self.terminal_count() >= count {
                return;
            }

            notified.await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PrefetchEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PrefetchHook for RecordingHook {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn on_event(&self, event: &PrefetchEvent) {
        self.lock().push(event.clone());
        self.notify.notify_waiters();
    }
}
