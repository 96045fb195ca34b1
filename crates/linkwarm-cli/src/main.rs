//! linkwarm CLI
//!
//! Prefetches a list of URLs so later requests hit warm caches.

use clap::Parser;
use linkwarm_cli::{App, init_logging, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();

    // Logs go to stderr so the summary on stdout stays clean
    init_logging(app.log_level)?;

    let summary = run::execute(app).await?;
    println!("{summary}");

    Ok(())
}
