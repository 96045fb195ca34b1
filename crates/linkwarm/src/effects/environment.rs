use std::future::Future;

use crate::data::{InsertionPoint, LinkElement, PrefetchRequest, RelSupport};
use crate::error::Result;

/// The document side of a host environment.
///
/// Implemented by whatever owns a DOM (a browser binding, a headless page,
/// or a test double). Everything the link strategy needs goes through here.
pub trait Document: Send + Sync {
    /// Ask the link relation support query whether `rel` is supported.
    fn supports_rel(&self, rel: &str) -> RelSupport;

    /// Whether the document has a `<head>` element.
    fn has_head(&self) -> bool;

    /// Whether the document has at least one `<script>` element with a parent.
    fn has_script(&self) -> bool;

    /// Append `link` at `point` and wait for it to settle.
    ///
    /// Resolves `Ok(())` on the element's load event and an error on its
    /// error event.
    fn append_link(
        &self,
        point: InsertionPoint,
        link: LinkElement,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// XMLHttpRequest-style transport.
pub trait XhrTransport: Send + Sync {
    /// Issue a GET and return the final HTTP status once the body has loaded.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received at all.
    fn send(&self, request: &PrefetchRequest) -> impl Future<Output = Result<u16>> + Send;
}

/// `fetch()`-style transport.
pub trait FetchTransport: Send + Sync {
    /// Issue a GET and return the HTTP status once the response has arrived.
    fn fetch(&self, request: &PrefetchRequest) -> impl Future<Output = Result<u16>> + Send;
}

/// Capability provider for a host environment.
///
/// Each optional capability mirrors a feature a runtime may or may not
/// expose. The orchestrator queries the document once, at construction,
/// and the fetch transport on every high-priority request.
///
/// # Implementations
///
/// - [`NativeEnvironment`](crate::NativeEnvironment): `reqwest`-backed, no document
/// - Test doubles in `tests/`
pub trait Environment: Send + Sync + 'static {
    type Document: Document;
    type Xhr: XhrTransport;
    type Fetch: FetchTransport;

    /// The document, if this environment has one.
    fn document(&self) -> Option<&Self::Document>;

    /// The XHR transport. Every environment has one.
    fn xhr(&self) -> &Self::Xhr;

    /// The fetch transport, if this environment has one.
    fn fetch(&self) -> Option<&Self::Fetch>;
}

/// Capability type for environments lacking a document or a fetch transport.
///
/// Never constructed; use it as the associated type and return `None`.
#[derive(Debug, Clone, Copy)]
pub enum Unsupported {}

impl FetchTransport for Unsupported {
    async fn fetch(&self, _request: &PrefetchRequest) -> Result<u16> {
        match *self {}
    }
}

impl Document for Unsupported {
    fn supports_rel(&self, _rel: &str) -> RelSupport {
        match *self {}
    }

    fn has_head(&self) -> bool {
        match *self {}
    }

    fn has_script(&self) -> bool {
        match *self {}
    }

    async fn append_link(&self, _point: InsertionPoint, _link: LinkElement) -> Result<()> {
        match *self {}
    }
}
