//! Pure decisions for prefetching.
//!
//! Feature detection and strategy selection. Nothing here performs I/O;
//! the document is only asked a synchronous capability question.

mod detect;
mod select;

pub use detect::{is_prefetch_success, supports_prefetch};
pub use select::{insertion_point, select_high_priority_strategy, select_standard_strategy};
