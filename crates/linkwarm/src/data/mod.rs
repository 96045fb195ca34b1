//! Immutable data types for prefetch operations.
//!
//! Priorities, requests, link elements and the events reported to hooks.
//! None of these perform I/O.

pub mod event;
pub mod priority;
pub mod request;

pub use event::{PrefetchEvent, UrlState};
pub use priority::Priority;
pub use request::{
    Credentials, InsertionPoint, LinkElement, PrefetchRequest, RelSupport, StrategyKind,
};
