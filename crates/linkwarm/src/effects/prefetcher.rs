//! Orchestration of prefetches across strategies.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::core::{select_high_priority_strategy, select_standard_strategy, supports_prefetch};
use crate::data::{LinkElement, PrefetchEvent, Priority, StrategyKind};
use crate::effects::environment::{Document, Environment};
use crate::effects::hooks::PrefetchHook;
use crate::effects::registry::Registry;
use crate::effects::strategy;

/// What [`Prefetcher::prefetch`] did with a URL.
///
/// Dropping a `Detached` handle does not cancel the task.
#[derive(Debug)]
pub enum Dispatch {
    /// The registry already had the URL; no request was issued.
    Skipped,

    /// A prefetch task was spawned and runs independently of the caller.
    Detached(JoinHandle<()>),

    /// No async runtime was available to run the task, so nothing was issued.
    Unavailable,
}

impl Dispatch {
    pub fn is_detached(&self) -> bool {
        matches!(self, Dispatch::Detached(_))
    }

    /// Wait for a detached task to finish. Returns immediately otherwise.
    ///
    /// The task swallows its own failures, so there is nothing to return.
    pub async fn join(self) {
        if let Dispatch::Detached(handle) = self
            && let Err(e) = handle.await
        {
            warn!("prefetch task did not finish: {e}");
        }
    }
}

#[derive(Clone, Default)]
struct Hooks(Arc<Vec<Arc<dyn PrefetchHook>>>);

impl Hooks {
    fn push(&mut self, hook: Arc<dyn PrefetchHook>) {
        Arc::make_mut(&mut self.0).push(hook);
    }

    fn emit(&self, event: PrefetchEvent) {
        for hook in self.0.iter() {
            trace!(hook = hook.name(), url = event.url(), "delivering prefetch event");
            hook.on_event(&event);
        }
    }
}

/// Dispatches prefetches for URLs through the strategies an environment supports.
///
/// The standard strategy is selected once, when the prefetcher is built:
/// link prefetch if the environment's document supports it, XHR otherwise.
/// High-priority requests go through fetch (or XHR without fetch) on every
/// call.
///
/// Every prefetch runs as a detached tokio task. Standard-priority
/// successes are written to the [`Registry`]; high-priority requests never
/// are, so they are issued again on every call. Failures are logged at
/// debug level and reported to hooks, never to the caller.
///
/// A URL is skipped only once a prefetch for it has completed. Two calls
/// for the same URL before the first finishes both issue a request.
pub struct Prefetcher<E: Environment> {
    env: Arc<E>,
    registry: Registry,
    standard: StrategyKind,
    hooks: Hooks,
}

impl<E: Environment> Prefetcher<E> {
    pub fn new(env: E, registry: Registry) -> Self {
        Self::from_shared(Arc::new(env), registry)
    }

    pub fn from_shared(env: Arc<E>, registry: Registry) -> Self {
        let support = env
            .document()
            .map(|document| document.supports_rel(LinkElement::PREFETCH_REL));
        let standard = select_standard_strategy(supports_prefetch(support));
        debug!(strategy = %standard, "selected standard prefetch strategy");

        Self {
            env,
            registry,
            standard,
            hooks: Hooks::default(),
        }
    }

    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn PrefetchHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The strategy chosen at construction for standard-priority requests.
    pub fn standard_strategy(&self) -> StrategyKind {
        self.standard
    }

    /// Prefetch every URL in `urls`.
    ///
    /// Fire-and-forget: returns as soon as each URL has been dispatched or
    /// skipped, without waiting for any request. Observe completion through
    /// a [`PrefetchHook`].
    pub fn prefetch_links<I, S>(&self, urls: I, priority: Priority)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in urls {
            let _ = self.prefetch(url, priority);
        }
    }

    /// Prefetch a single URL and report how it was handled.
    pub fn prefetch(&self, url: impl Into<String>, priority: Priority) -> Dispatch {
        let url = url.into();

        if self.registry.is_fetched(&url) {
            trace!(%url, "already prefetched, skipping");
            self.hooks.emit(PrefetchEvent::Skipped { url, priority });
            return Dispatch::Skipped;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!(%url, "no async runtime available, prefetch not issued");
            return Dispatch::Unavailable;
        };

        let strategy = match priority {
            Priority::High => select_high_priority_strategy(self.env.fetch().is_some()),
            Priority::Standard => self.standard,
        };

        debug!(%url, %priority, %strategy, "dispatching prefetch");
        self.hooks.emit(PrefetchEvent::Dispatched {
            url: url.clone(),
            priority,
            strategy,
        });

        let env = self.env.clone();
        let registry = self.registry.clone();
        let hooks = self.hooks.clone();

        let task = async move {
            let result = match priority {
                Priority::High => strategy::high_priority_prefetch(&*env, &url).await,
                Priority::Standard => strategy::run(&*env, strategy, &url).await,
            };

            match result {
                Ok(()) => {
                    if !priority.is_high() {
                        registry.mark_fetched(url.as_str());
                    }
                    debug!(%url, %strategy, "prefetch completed");
                    hooks.emit(PrefetchEvent::Completed {
                        url,
                        priority,
                        strategy,
                    });
                }
                Err(error) => {
                    debug!(%url, %strategy, %error, "prefetch failed");
                    hooks.emit(PrefetchEvent::Failed {
                        url,
                        priority,
                        strategy,
                        error,
                    });
                }
            }
        };

        Dispatch::Detached(runtime.spawn(task))
    }
}

impl<E: Environment> Clone for Prefetcher<E> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
            registry: self.registry.clone(),
            standard: self.standard,
            hooks: self.hooks.clone(),
        }
    }
}
