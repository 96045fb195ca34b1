//! CLI argument definitions for linkwarm.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Prefetch URLs ahead of need.
///
/// Standard-priority requests are issued once per URL and only a 200 counts
/// as success. High-priority requests use the fetch path and are issued on
/// every run. Failures are never fatal.
///
/// ## Examples
///
/// Warm two assets:
///   linkwarm https://example.com/app.js https://example.com/app.css
///
/// Warm everything listed in a file at high priority:
///   linkwarm --file urls.txt --priority high
#[derive(Parser, Debug, Clone)]
#[command(name = "linkwarm", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// URLs to prefetch
    pub urls: Vec<String>,

    /// Read additional URLs from a file, one per line (`#` starts a comment)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Request priority; only "high" is special, anything else is standard
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Configuration file (defaults to ./linkwarm.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Never use the fetch transport; high priority falls back to XHR
    #[arg(long)]
    pub no_fetch: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Log level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
