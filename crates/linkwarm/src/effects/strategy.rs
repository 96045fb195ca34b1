//! The interchangeable prefetch strategies.
//!
//! Each strategy takes a URL and completes with `Ok(())` or a
//! [`PrefetchError`]. None of them retry.

use crate::core::{insertion_point, is_prefetch_success};
use crate::data::{LinkElement, PrefetchRequest, StrategyKind};
use crate::effects::environment::{Document, Environment, FetchTransport, XhrTransport};
use crate::error::{PrefetchError, Result};

/// Insert a hidden `<link rel=prefetch href=url>` and wait for it to settle.
///
/// The link goes into the document head, or into the parent of the first
/// script element when there is no head.
pub async fn link_prefetch<E: Environment + ?Sized>(env: &E, url: &str) -> Result<()> {
    let document = env.document().ok_or(PrefetchError::NoDocument)?;
    let point = insertion_point(document.has_head(), document.has_script())
        .ok_or(PrefetchError::NoInsertionPoint)?;

    document.append_link(point, LinkElement::prefetch(url)).await
}

/// Credentialed GET through the XHR transport. Anything but a 200 is a failure.
pub async fn xhr_prefetch<E: Environment + ?Sized>(env: &E, url: &str) -> Result<()> {
    let status = env.xhr().send(&PrefetchRequest::credentialed(url)).await?;

    if is_prefetch_success(status) {
        Ok(())
    } else {
        Err(PrefetchError::Status(status))
    }
}

/// Credentialed fetch, falling back to [`xhr_prefetch`] when the
/// environment has no fetch transport.
///
/// On the fetch path any response counts as completion; the status is not
/// inspected. The XHR fallback keeps its own status check.
pub async fn high_priority_prefetch<E: Environment + ?Sized>(env: &E, url: &str) -> Result<()> {
    match env.fetch() {
        Some(transport) => {
            transport
                .fetch(&PrefetchRequest::credentialed(url))
                .await?;
            Ok(())
        }
        None => xhr_prefetch(env, url).await,
    }
}

/// Run the strategy named by `kind`.
///
/// `StrategyKind::Fetch` is the high-priority strategy, so it falls back to
/// XHR on its own when fetch is missing.
pub async fn run<E: Environment + ?Sized>(env: &E, kind: StrategyKind, url: &str) -> Result<()> {
    match kind {
        StrategyKind::Link => link_prefetch(env, url).await,
        StrategyKind::Xhr => xhr_prefetch(env, url).await,
        StrategyKind::Fetch => high_priority_prefetch(env, url).await,
    }
}
