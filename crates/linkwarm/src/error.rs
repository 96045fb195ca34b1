//! Error types for linkwarm.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrefetchError>;

/// Why a single prefetch attempt did not succeed.
///
/// These never reach the caller of
/// [`Prefetcher::prefetch_links`](crate::Prefetcher::prefetch_links); they are
/// logged and handed to hooks, and the URL stays eligible for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefetchError {
    #[error("no document available for link prefetch")]
    NoDocument,

    #[error("document has neither a head nor a script parent to insert into")]
    NoInsertionPoint,

    #[error("link element failed to load: {0}")]
    LinkLoad(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for PrefetchError {
    fn from(e: reqwest::Error) -> Self {
        PrefetchError::Transport(e.to_string())
    }
}
