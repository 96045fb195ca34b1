use crate::data::{InsertionPoint, StrategyKind};

/// Pick the strategy for standard-priority prefetches.
///
/// # Examples
///
/// ```
/// use linkwarm::{StrategyKind, select_standard_strategy};
///
/// assert_eq!(select_standard_strategy(true), StrategyKind::Link);
/// assert_eq!(select_standard_strategy(false), StrategyKind::Xhr);
/// ```
pub fn select_standard_strategy(prefetch_supported: bool) -> StrategyKind {
    if prefetch_supported {
        StrategyKind::Link
    } else {
        StrategyKind::Xhr
    }
}

/// Pick the transport for high-priority prefetches: fetch when present, XHR otherwise.
pub fn select_high_priority_strategy(fetch_available: bool) -> StrategyKind {
    if fetch_available {
        StrategyKind::Fetch
    } else {
        StrategyKind::Xhr
    }
}

/// Where to append a link element, head first.
pub fn insertion_point(has_head: bool, has_script: bool) -> Option<InsertionPoint> {
    match (has_head, has_script) {
        (true, _) => Some(InsertionPoint::Head),
        (false, true) => Some(InsertionPoint::ScriptParent),
        (false, false) => None,
    }
}
