//! Command-line front end for the `linkwarm` prefetcher.
//!
//! Split from `main.rs` so argument handling, configuration and the run
//! summary can be tested directly.

pub mod args;
pub mod config;
pub mod logging;
pub mod run;
pub mod urls;

pub use args::{App, LogLevel};
pub use config::{ConfigError, LinkwarmConfig};
pub use logging::init_logging;
pub use run::Summary;
