use std::fmt;

/// The mechanism used to trigger a prefetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Insert a hidden `<link rel=prefetch>` and wait for its load event.
    Link,
    /// Credentialed GET that only counts a 200 as success.
    Xhr,
    /// Credentialed fetch with no status check.
    Fetch,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Link => "link",
            StrategyKind::Xhr => "xhr",
            StrategyKind::Fetch => "fetch",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential mode of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credentials {
    /// Send cookies and auth with the request, cross-origin included.
    #[default]
    Include,
    Omit,
}

/// A single GET issued through an XHR or fetch transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchRequest {
    pub url: String,
    pub credentials: Credentials,
}

impl PrefetchRequest {
    /// Build a credentialed request, the only kind the strategies issue.
    pub fn credentialed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: Credentials::Include,
        }
    }
}

/// The hidden link element handed to a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkElement {
    pub rel: String,
    pub href: String,
}

impl LinkElement {
    pub const PREFETCH_REL: &'static str = "prefetch";

    pub fn prefetch(href: impl Into<String>) -> Self {
        Self {
            rel: Self::PREFETCH_REL.to_string(),
            href: href.into(),
        }
    }
}

/// Answer of a document's link relation support query.
///
/// `Ok(Some(_))` is the answer, `Ok(None)` means the document has no
/// support query, `Err(..)` carries what the query threw.
pub type RelSupport = std::result::Result<Option<bool>, String>;

/// Where a link element is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// The document `<head>`.
    Head,
    /// Parent node of the first `<script>` element, used when there is no head.
    ScriptParent,
}
