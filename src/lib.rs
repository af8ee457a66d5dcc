//! Client-side paginated feed engine for a cricket live-score app.
//!
//! Fetches, decodes and incrementally assembles a heterogeneous,
//! server-paginated feed, and supports promoting the feed's embedded
//! upcoming-matches preview into its own independently paginated
//! collection seeded with the already-fetched rows.

pub mod config;
pub mod coordinator;
pub mod decode;
pub mod error;
pub mod gateway;
pub mod loader;
pub mod pager;
pub mod preview;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Configuration + errors
pub use config::FeedConfig;
pub use error::{FeedError, Result};

// REST client + gateway seam
pub use gateway::ContentGateway;
pub use rest::FeedHttpClient;

// Item decoding
pub use decode::{decode_item, decode_page, decode_results_page};

// Domain items
pub use types::{
    BannerAd, FeedItem, LiveMatch, MatchFormat, MatchResult, NewsArticle, TeamScore,
    UpcomingCarousel, VideoHighlight,
};

// Upcoming fixtures
pub use types::{Team, UpcomingMatch};

// Wire envelopes
pub use types::{FeedPageEnvelope, PaginationInfo, RawItem, ResultsPageEnvelope, UpcomingPageEnvelope};

// Pagination contract
pub use loader::{page_keys, PageLoader};
pub use types::{Direction, Keyed, LoadParams, LoadState, LoadStates, Page, PageKey, PageNumber};

// Loaders
pub use loader::feed::MainFeedLoader;
pub use loader::results::ResultsLoader;
pub use loader::upcoming::{PreviewSeededLoader, UpcomingLoader};

// Orchestration
pub use coordinator::FeedCoordinator;
pub use pager::{LoadOutcome, Pager};
pub use preview::PreviewCache;
