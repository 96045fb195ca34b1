use crate::data::RelSupport;

/// Returns `true` if a document's answer to the `prefetch` relation support
/// query reports support for `<link rel=prefetch>`.
///
/// `support` is `None` when there is no document. There is no support then,
/// nor when the document exposes no support query or the query fails.
///
/// # Examples
///
/// ```
/// use linkwarm::core::supports_prefetch;
///
/// assert!(supports_prefetch(Some(Ok(Some(true)))));
/// assert!(!supports_prefetch(Some(Ok(None))));
/// assert!(!supports_prefetch(None));
/// ```
pub fn supports_prefetch(support: Option<RelSupport>) -> bool {
    matches!(support, Some(Ok(Some(true))))
}

/// Returns `true` for the only status the XHR strategy accepts.
///
/// # Examples
///
/// ```
/// use linkwarm::core::is_prefetch_success;
///
/// assert!(is_prefetch_success(200));
/// assert!(!is_prefetch_success(204));
/// assert!(!is_prefetch_success(304));
/// ```
pub fn is_prefetch_success(status: u16) -> bool {
    status == 200
}
