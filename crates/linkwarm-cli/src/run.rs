//! Execution of a prefetch run.

use std::fmt;
use std::sync::Arc;

use anyhow::{Result, bail};
use futures_util::future::join_all;
use linkwarm::{
    Dispatch, NativeEnvironment, PrefetchEvent, Prefetcher, RecordingHook, Registry,
};
use tracing::info;

use crate::args::App;
use crate::config::LinkwarmConfig;
use crate::urls::collect_urls;

/// Counts of what happened to each URL during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub dispatched: usize,
    pub skipped: usize,
    pub completed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_events(events: &[PrefetchEvent]) -> Self {
        events.iter().fold(Self::default(), |mut summary, event| {
            match event {
                PrefetchEvent::Skipped { .. } => summary.skipped += 1,
                PrefetchEvent::Dispatched { .. } => summary.dispatched += 1,
                PrefetchEvent::Completed { .. } => summary.completed += 1,
                PrefetchEvent::Failed { .. } => summary.failed += 1,
            }
            summary
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dispatched={} skipped={} completed={} failed={}",
            self.dispatched, self.skipped, self.completed, self.failed
        )
    }
}

/// Prefetch every URL named by `app` and wait for the detached tasks.
///
/// Prefetch failures only show up in the summary; the run itself fails only
/// when the configuration or URL list cannot be read.
pub async fn execute(app: App) -> Result<Summary> {
    let config = LinkwarmConfig::load(app.config.as_deref())?
        .with_overrides(app.priority.as_deref(), app.no_fetch);

    let urls = collect_urls(&app.urls, app.file.as_deref())?;
    if urls.is_empty() {
        bail!("no URLs to prefetch; pass them as arguments or with --file");
    }

    let env = NativeEnvironment::with_options(config.native_options())?;
    let hook = Arc::new(RecordingHook::new());
    let prefetcher = Prefetcher::new(env, Registry::new()).with_hook(hook.clone());

    info!(
        count = urls.len(),
        priority = %config.priority,
        strategy = %prefetcher.standard_strategy(),
        "prefetching"
    );

    let dispatches: Vec<Dispatch> = urls
        .into_iter()
        .map(|url| prefetcher.prefetch(url, config.priority))
        .collect();
    join_all(dispatches.into_iter().map(Dispatch::join)).await;

    Ok(Summary::from_events(&hook.events()))
}
