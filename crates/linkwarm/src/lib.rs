//! Best-effort prefetching of URLs ahead of need.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable request, priority and event types
//! - [`core`] - Pure capability detection and strategy selection
//! - [`effects`] - Strategies, registry and orchestration behind environment traits
//!
//! # Key Features
//!
//! - **Capability-driven**: `<link rel=prefetch>` when the document supports it, XHR otherwise
//! - **High priority**: credentialed fetch, falling back to XHR
//! - **Injectable registry**: the "already prefetched" set is owned by the caller
//! - **Silent**: failures are logged and reported to hooks, never returned
//!
//! # Example
//!
//! ```no_run
//! use linkwarm::{NativeEnvironment, Prefetcher, Priority, Registry};
//!
//! # async fn run() -> linkwarm::Result<()> {
//! let env = NativeEnvironment::new()?;
//! let prefetcher = Prefetcher::new(env, Registry::new());
//! prefetcher.prefetch_links(["https://example.com/app.js"], Priority::Standard);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{select_high_priority_strategy, select_standard_strategy, supports_prefetch};
pub use data::{
    Credentials, InsertionPoint, LinkElement, PrefetchEvent, PrefetchRequest, Priority,
    RelSupport, StrategyKind, UrlState,
};
pub use effects::{
    Dispatch, Document, Environment, FetchTransport, PrefetchHook, Prefetcher, RecordingHook,
    Registry, Unsupported, XhrTransport,
};

#[cfg(feature = "reqwest")]
pub use effects::{NativeEnvironment, NativeOptions, ReqwestTransport};

pub use error::{PrefetchError, Result};
