use serde::{Deserialize, Serialize};

use super::upcoming::UpcomingMatch;

/// One undecoded entry from a feed page: a type tag plus an opaque payload.
///
/// The payload is kept as a raw JSON value so that a malformed entry can be
/// skipped without failing the rest of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub timestamp: i64,
    pub payload: serde_json::Value,
}

/// Server-reported pagination metadata attached to every page response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of the main feed as returned by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPageEnvelope {
    pub items: Vec<RawItem>,
    pub pagination: PaginationInfo,
}

/// One page of the upcoming-matches collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingPageEnvelope {
    pub items: Vec<UpcomingMatch>,
    pub pagination: PaginationInfo,
}

/// One page of the match-results collection.
///
/// Results share the tagged-item wire shape with the main feed; only
/// `matchResult` entries are expected, anything else is skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsPageEnvelope {
    pub items: Vec<RawItem>,
    pub pagination: PaginationInfo,
}
