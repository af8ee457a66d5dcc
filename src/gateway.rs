use std::future::Future;

use crate::error::Result;
use crate::rest::FeedHttpClient;
use crate::types::{FeedPageEnvelope, ResultsPageEnvelope, UpcomingPageEnvelope};

/// The remote content API, one method per paginated collection.
///
/// Page numbers are 1-based. Implementations must return either a complete
/// envelope or an error; partial pages are never surfaced. Tests substitute
/// scripted in-memory gateways through this seam.
pub trait ContentGateway: Send + Sync {
    fn fetch_main_feed(
        &self,
        page: u32,
        page_size: usize,
    ) -> impl Future<Output = Result<FeedPageEnvelope>> + Send;

    fn fetch_upcoming_matches(
        &self,
        page: u32,
        page_size: usize,
    ) -> impl Future<Output = Result<UpcomingPageEnvelope>> + Send;

    fn fetch_match_results(
        &self,
        page: u32,
        page_size: usize,
    ) -> impl Future<Output = Result<ResultsPageEnvelope>> + Send;
}

impl ContentGateway for FeedHttpClient {
    async fn fetch_main_feed(&self, page: u32, page_size: usize) -> Result<FeedPageEnvelope> {
        self.get_main_feed(page, page_size).await
    }

    async fn fetch_upcoming_matches(
        &self,
        page: u32,
        page_size: usize,
    ) -> Result<UpcomingPageEnvelope> {
        self.get_upcoming_matches(page, page_size).await
    }

    async fn fetch_match_results(
        &self,
        page: u32,
        page_size: usize,
    ) -> Result<ResultsPageEnvelope> {
        self.get_match_results(page, page_size).await
    }
}
