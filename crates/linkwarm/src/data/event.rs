use std::fmt;

use super::{Priority, StrategyKind};
use crate::error::PrefetchError;

/// Lifecycle of a single URL.
///
/// URLs move through these states in order:
/// Unknown → InFlight → Fetched | Failed
///
/// There is no transition back to `Unknown`, and a `Failed` URL is simply
/// eligible to be dispatched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlState {
    /// Never dispatched, or dispatched and not yet recorded.
    #[default]
    Unknown,

    /// A strategy has been dispatched and has not completed.
    InFlight,

    /// Completed successfully.
    ///
    /// Only standard-priority completions are written to the registry.
    Fetched,

    /// Completed with an error that was swallowed.
    Failed,
}

impl fmt::Display for UrlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlState::Unknown => write!(f, "Unknown"),
            UrlState::InFlight => write!(f, "InFlight"),
            UrlState::Fetched => write!(f, "Fetched"),
            UrlState::Failed => write!(f, "Failed"),
        }
    }
}

/// Notification delivered to every registered [`PrefetchHook`](crate::PrefetchHook).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefetchEvent {
    /// Registry hit, no request issued.
    Skipped { url: String, priority: Priority },

    /// A strategy was spawned for the URL.
    Dispatched {
        url: String,
        priority: Priority,
        strategy: StrategyKind,
    },

    /// The strategy finished successfully.
    Completed {
        url: String,
        priority: Priority,
        strategy: StrategyKind,
    },

    /// The strategy failed; the error goes no further than the hooks.
    Failed {
        url: String,
        priority: Priority,
        strategy: StrategyKind,
        error: PrefetchError,
    },
}

impl PrefetchEvent {
    pub fn url(&self) -> &str {
        match self {
            PrefetchEvent::Skipped { url, .. }
            | PrefetchEvent::Dispatched { url, .. }
            | PrefetchEvent::Completed { url, .. }
            | PrefetchEvent::Failed { url, .. } => url,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            PrefetchEvent::Skipped { priority, .. }
            | PrefetchEvent::Dispatched { priority, .. }
            | PrefetchEvent::Completed { priority, .. }
            | PrefetchEvent::Failed { priority, .. } => *priority,
        }
    }

    /// State the URL is in once this event has been delivered.
    ///
    /// A skip reports `Fetched` because only registry hits are skipped.
    pub fn state(&self) -> UrlState {
        match self {
            PrefetchEvent::Skipped { .. } => UrlState::Fetched,
            PrefetchEvent::Dispatched { .. } => UrlState::InFlight,
            PrefetchEvent::Completed { .. } => UrlState::Fetched,
            PrefetchEvent::Failed { .. } => UrlState::Failed,
        }
    }

    /// True for the events that end a dispatched task.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PrefetchEvent::Completed { .. } | PrefetchEvent::Failed { .. }
        )
    }
}
