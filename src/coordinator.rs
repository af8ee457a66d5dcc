//! Screen-scoped composition of the pagers.
//!
//! The coordinator owns the two pieces of state that outlive any single
//! pager: the carousel preview hand-off and the cancellation token. It
//! survives UI reconfiguration and is torn down with the screen, at which
//! point every in-flight load it spawned is cancelled.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::FeedConfig;
use crate::gateway::ContentGateway;
use crate::loader::feed::MainFeedLoader;
use crate::loader::results::ResultsLoader;
use crate::loader::upcoming::PreviewSeededLoader;
use crate::pager::Pager;
use crate::preview::PreviewCache;

/// Owns the main-feed pager, the preview hand-off and teardown.
pub struct FeedCoordinator<G: ContentGateway + Clone> {
    gateway: G,
    config: FeedConfig,
    preview: Arc<PreviewCache>,
    cancel: CancellationToken,
    main: Pager<MainFeedLoader<G>>,
}

impl<G: ContentGateway + Clone> FeedCoordinator<G> {
    pub fn new(gateway: G, config: FeedConfig) -> Self {
        let preview = Arc::new(PreviewCache::new());
        let cancel = CancellationToken::new();
        let main = Pager::new(
            MainFeedLoader::new(gateway.clone(), Arc::clone(&preview)),
            config.feed_page_size,
            cancel.child_token(),
        );
        Self {
            gateway,
            config,
            preview,
            cancel,
            main,
        }
    }

    /// The main-feed pager.
    pub fn main_feed(&self) -> &Pager<MainFeedLoader<G>> {
        &self.main
    }

    /// Build the standalone upcoming-matches pager.
    ///
    /// Consumes the cached carousel preview: the returned pager's first
    /// page starts from whatever preview the main feed has surfaced so
    /// far, or falls back to plain pagination if none has. The cache is
    /// read here and nowhere else, so opening the screen twice seeds only
    /// the first pager.
    pub fn open_upcoming_matches(&self) -> Pager<PreviewSeededLoader<G>> {
        let seed = self.preview.take();
        debug!(
            seeded = seed.as_ref().map_or(0, Vec::len),
            "opening upcoming-matches pager"
        );
        Pager::new(
            PreviewSeededLoader::new(self.gateway.clone(), seed),
            self.config.upcoming_page_size,
            self.cancel.child_token(),
        )
    }

    /// Build the match-results pager.
    pub fn open_match_results(&self) -> Pager<ResultsLoader<G>> {
        Pager::new(
            ResultsLoader::new(self.gateway.clone()),
            self.config.results_page_size,
            self.cancel.child_token(),
        )
    }

    /// Number of preview items currently waiting to seed a secondary pager.
    pub fn pending_preview_len(&self) -> usize {
        self.preview.len()
    }

    /// Cancel every in-flight load of every pager built here. Partially
    /// received pages are discarded; nothing is committed after this.
    pub fn shutdown(&self) {
        debug!("feed coordinator shutting down");
        self.cancel.cancel();
    }
}
