use std::collections::HashSet;
use std::sync::Mutex;

use tracing::debug;

use crate::error::Result;
use crate::gateway::ContentGateway;
use crate::loader::{page_keys, requested_page, PageLoader};
use crate::types::{LoadParams, Page, PageNumber, UpcomingMatch};

/// Plain loader over the upcoming-matches collection.
pub struct UpcomingLoader<G> {
    gateway: G,
}

impl<G: ContentGateway> UpcomingLoader<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: ContentGateway> PageLoader for UpcomingLoader<G> {
    type Key = PageNumber;
    type Item = UpcomingMatch;

    async fn load(
        &self,
        params: LoadParams<PageNumber>,
    ) -> Result<Page<PageNumber, UpcomingMatch>> {
        let page = requested_page(&params);
        let envelope = self
            .gateway
            .fetch_upcoming_matches(page.get(), params.load_size)
            .await?;

        let (prev_key, next_key) = page_keys(
            page,
            params.load_size,
            envelope.items.len(),
            &envelope.pagination,
        );

        Ok(Page {
            items: envelope.items,
            prev_key,
            next_key,
        })
    }
}

/// Upcoming-matches loader whose first page is seeded with the carousel
/// preview captured from the main feed.
///
/// The seed is handed over once, at construction, and consumed by the
/// first first-page load that succeeds. A retry after a failed page 1
/// therefore still merges; a later refresh does not re-inject rows the
/// user has already scrolled past. Pages 2+ are plain pagination.
pub struct PreviewSeededLoader<G> {
    gateway: G,
    seed: Mutex<Option<Vec<UpcomingMatch>>>,
}

impl<G: ContentGateway> PreviewSeededLoader<G> {
    pub fn new(gateway: G, seed: Option<Vec<UpcomingMatch>>) -> Self {
        Self {
            gateway,
            seed: Mutex::new(seed),
        }
    }
}

impl<G: ContentGateway> PageLoader for PreviewSeededLoader<G> {
    type Key = PageNumber;
    type Item = UpcomingMatch;

    async fn load(
        &self,
        params: LoadParams<PageNumber>,
    ) -> Result<Page<PageNumber, UpcomingMatch>> {
        let page = requested_page(&params);
        // If the fetch fails the seed stays put and the error propagates:
        // stale preview rows are never substituted for a failed page.
        let envelope = self
            .gateway
            .fetch_upcoming_matches(page.get(), params.load_size)
            .await?;

        let (prev_key, next_key) = page_keys(
            page,
            params.load_size,
            envelope.items.len(),
            &envelope.pagination,
        );

        let items = if page == PageNumber::FIRST {
            match self.seed.lock().expect("seed poisoned").take() {
                Some(seed) => {
                    let merged = merge_preview(seed, envelope.items);
                    debug!(merged = merged.len(), "seeded first page with carousel preview");
                    merged
                }
                None => envelope.items,
            }
        } else {
            envelope.items
        };

        Ok(Page {
            items,
            prev_key,
            next_key,
        })
    }
}

/// Merge the preview list with the freshly fetched first page.
///
/// Preview rows keep their order ahead of the fetched rows; when the same
/// `match_id` appears in both, the fetched copy wins.
fn merge_preview(seed: Vec<UpcomingMatch>, fetched: Vec<UpcomingMatch>) -> Vec<UpcomingMatch> {
    let fetched_ids: HashSet<i64> = fetched.iter().map(|m| m.match_id).collect();
    let mut merged: Vec<UpcomingMatch> = seed
        .into_iter()
        .filter(|m| !fetched_ids.contains(&m.match_id))
        .collect();
    merged.extend(fetched);
    merged
}
