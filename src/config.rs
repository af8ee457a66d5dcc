/// Configuration for the feed engine.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL for the content API (e.g. `https://api.example.com/v1`).
    pub base_url: String,
    /// Items requested per main-feed page.
    pub feed_page_size: usize,
    /// Items requested per upcoming-matches page.
    pub upcoming_page_size: usize,
    /// Items requested per match-results page.
    pub results_page_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.crickfeed.example".to_string(),
            feed_page_size: 18,
            upcoming_page_size: 10,
            results_page_size: 10,
        }
    }
}
