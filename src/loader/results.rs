use crate::decode;
use crate::error::Result;
use crate::gateway::ContentGateway;
use crate::loader::{page_keys, requested_page, PageLoader};
use crate::types::{LoadParams, MatchResult, Page, PageNumber};

/// Loader for the finished-matches collection.
pub struct ResultsLoader<G> {
    gateway: G,
}

impl<G: ContentGateway> ResultsLoader<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: ContentGateway> PageLoader for ResultsLoader<G> {
    type Key = PageNumber;
    type Item = MatchResult;

    async fn load(
        &self,
        params: LoadParams<PageNumber>,
    ) -> Result<Page<PageNumber, MatchResult>> {
        let page = requested_page(&params);
        let envelope = self
            .gateway
            .fetch_match_results(page.get(), params.load_size)
            .await?;

        let raw_len = envelope.items.len();
        let items = decode::decode_results_page(&envelope.items);
        let (prev_key, next_key) =
            page_keys(page, params.load_size, raw_len, &envelope.pagination);

        Ok(Page {
            items,
            prev_key,
            next_key,
        })
    }
}
