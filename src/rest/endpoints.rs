use crate::error::Result;
use crate::rest::FeedHttpClient;
use crate::types::{FeedPageEnvelope, ResultsPageEnvelope, UpcomingPageEnvelope};

impl FeedHttpClient {
    /// GET /feed?page=&pageSize= - One page of the heterogeneous main feed.
    pub async fn get_main_feed(&self, page: u32, page_size: usize) -> Result<FeedPageEnvelope> {
        let page_str = page.to_string();
        let size_str = page_size.to_string();
        self.get(
            "/feed",
            &[("page", page_str.as_str()), ("pageSize", size_str.as_str())],
        )
        .await
    }

    /// GET /matches/upcoming?page=&pageSize= - One page of upcoming fixtures.
    pub async fn get_upcoming_matches(
        &self,
        page: u32,
        page_size: usize,
    ) -> Result<UpcomingPageEnvelope> {
        let page_str = page.to_string();
        let size_str = page_size.to_string();
        self.get(
            "/matches/upcoming",
            &[("page", page_str.as_str()), ("pageSize", size_str.as_str())],
        )
        .await
    }

    /// GET /matches/results?page=&pageSize= - One page of finished matches.
    pub async fn get_match_results(
        &self,
        page: u32,
        page_size: usize,
    ) -> Result<ResultsPageEnvelope> {
        let page_str = page.to_string();
        let size_str = page_size.to_string();
        self.get(
            "/matches/results",
            &[("page", page_str.as_str()), ("pageSize", size_str.as_str())],
        )
        .await
    }
}
