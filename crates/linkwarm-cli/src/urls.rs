//! Gathering the URL list from arguments and files.

use std::path::Path;

use anyhow::{Context, Result};

/// Parse a newline-separated URL list. Blank lines and `#` comments are ignored.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Positional URLs first, then the file's URLs in file order.
///
/// Duplicates are kept; the prefetcher decides what to skip.
pub fn collect_urls(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut urls = args.to_vec();

    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read URL list {}", path.display()))?;
        urls.extend(parse_url_list(&text));
    }

    Ok(urls)
}
