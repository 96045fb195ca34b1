//! The record of URLs that have already been prefetched.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared map of URL to "has been prefetched".
///
/// Owned by the caller and handed to a [`Prefetcher`](crate::Prefetcher).
/// Cloning yields another handle to the same map, so prefetchers built from
/// clones share their history while separately created registries stay
/// isolated.
///
/// Entries are written only when a standard-priority prefetch succeeds and
/// are never removed by the prefetcher.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Arc<Mutex<HashMap<String, bool>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetched(&self, url: &str) -> bool {
        self.lock().get(url).copied().unwrap_or(false)
    }

    pub fn mark_fetched(&self, url: impl Into<String>) {
        self.lock().insert(url.into(), true);
    }

    pub fn len(&self) -> usize {
        self.lock().values().filter(|fetched| **fetched).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted snapshot of every URL marked fetched.
    pub fn fetched_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self
            .lock()
            .iter()
            .filter(|(_, fetched)| **fetched)
            .map(|(url, _)| url.clone())
            .collect();
        urls.sort();
        urls
    }

    // A panic while holding the lock cannot leave the map half-written,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, bool>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
