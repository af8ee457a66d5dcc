use std::sync::Arc;

use crate::decode;
use crate::error::Result;
use crate::gateway::ContentGateway;
use crate::loader::{page_keys, requested_page, PageLoader};
use crate::preview::PreviewCache;
use crate::types::{FeedItem, FeedPageEnvelope, LoadParams, Page, PageNumber};

/// Loader for the heterogeneous main feed.
///
/// Decodes each raw page into [`FeedItem`]s and, as a side effect of that
/// transform, captures any carousel's preview list into the shared
/// [`PreviewCache`] so a later upcoming-matches pager can start from it.
pub struct MainFeedLoader<G> {
    gateway: G,
    preview: Arc<PreviewCache>,
}

impl<G: ContentGateway> MainFeedLoader<G> {
    pub fn new(gateway: G, preview: Arc<PreviewCache>) -> Self {
        Self { gateway, preview }
    }

    fn transform(&self, raw: &FeedPageEnvelope) -> Vec<FeedItem> {
        let items = decode::decode_page(&raw.items);
        for item in &items {
            if let FeedItem::UpcomingCarousel(carousel) = item {
                self.preview.store(carousel.preview_items.clone());
            }
        }
        items
    }
}

impl<G: ContentGateway> PageLoader for MainFeedLoader<G> {
    type Key = PageNumber;
    type Item = FeedItem;

    async fn load(
        &self,
        params: LoadParams<PageNumber>,
    ) -> Result<Page<PageNumber, FeedItem>> {
        let page = requested_page(&params);
        let envelope = self
            .gateway
            .fetch_main_feed(page.get(), params.load_size)
            .await?;

        let raw_len = envelope.items.len();
        let items = self.transform(&envelope);
        // Keys are computed from the raw item count: a page whose items
        // were all skipped as unrecognized is still a full page as far as
        // pagination is concerned.
        let (prev_key, next_key) =
            page_keys(page, params.load_size, raw_len, &envelope.pagination);

        Ok(Page {
            items,
            prev_key,
            next_key,
        })
    }
}
