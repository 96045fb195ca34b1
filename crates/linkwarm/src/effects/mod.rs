//! I/O side of prefetching.
//!
//! Environment traits, the strategies built on them, the registry, hooks
//! and the [`Prefetcher`] that ties them together. Everything that touches
//! the network or a document lives behind the traits in [`environment`].

pub mod environment;
pub mod hooks;
mod native;
mod prefetcher;
mod registry;
pub mod strategy;

pub use environment::{Document, Environment, FetchTransport, Unsupported, XhrTransport};
pub use hooks::{PrefetchHook, RecordingHook};
pub use prefetcher::{Dispatch, Prefetcher};
pub use registry::Registry;

#[cfg(feature = "reqwest")]
pub use native::{NativeEnvironment, NativeOptions, ReqwestTransport};
