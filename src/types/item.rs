use serde::{Deserialize, Serialize};

use super::upcoming::UpcomingMatch;

/// Match format. Unknown wire values map to [`MatchFormat::Other`] so that a
/// new format introduced server-side never fails an otherwise valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MatchFormat {
    Test,
    Odi,
    T20,
    Other,
}

impl From<String> for MatchFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            "test" => MatchFormat::Test,
            "odi" => MatchFormat::Odi,
            "t20" => MatchFormat::T20,
            _ => MatchFormat::Other,
        }
    }
}

/// Per-team score line shown for live and finished matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    pub name: String,
    pub short_name: String,
    /// e.g. `"287/6"`. Absent before the innings starts.
    #[serde(default)]
    pub score: Option<String>,
    /// e.g. `"42.3"`. Absent for finished limited-overs innings.
    #[serde(default)]
    pub overs: Option<String>,
}

/// A match currently in play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub id: String,
    pub timestamp: i64,
    pub series_name: String,
    pub match_type: MatchFormat,
    pub venue: String,
    /// Free-form status line, e.g. `"India need 54 runs in 32 balls"`.
    pub status: String,
    pub home: TeamScore,
    pub away: TeamScore,
    #[serde(default)]
    pub run_rate: Option<f64>,
}

/// The embedded preview of the upcoming-matches collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingCarousel {
    pub id: String,
    pub timestamp: i64,
    pub title: String,
    /// Size of the full collection the preview was cut from.
    pub total_count: u64,
    pub preview_items: Vec<UpcomingMatch>,
}

/// An editorial news story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub timestamp: i64,
    pub headline: String,
    pub summary: String,
    pub image_url: String,
    #[serde(default)]
    pub read_time_minutes: Option<u32>,
}

/// A video highlight clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoHighlight {
    pub id: String,
    pub timestamp: i64,
    pub title: String,
    pub thumbnail_url: String,
    pub duration_seconds: u32,
    #[serde(default)]
    pub view_count: Option<u64>,
}

/// A finished match with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    pub timestamp: i64,
    pub series_name: String,
    pub match_type: MatchFormat,
    /// e.g. `"Australia won by 5 wickets"`.
    pub result: String,
    pub home: TeamScore,
    pub away: TeamScore,
}

/// A sponsored banner slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerAd {
    pub id: String,
    pub timestamp: i64,
    pub image_url: String,
    pub target_url: String,
}

/// One row of the main feed. Closed set: dispatch is always an exhaustive
/// `match`, so adding a variant is a compile-visible change everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedItem {
    LiveMatch(LiveMatch),
    UpcomingCarousel(UpcomingCarousel),
    NewsArticle(NewsArticle),
    VideoHighlight(VideoHighlight),
    MatchResult(MatchResult),
    BannerAd(BannerAd),
}

impl FeedItem {
    /// Stable identity of the row, unique within a loaded collection.
    pub fn id(&self) -> &str {
        match self {
            FeedItem::LiveMatch(m) => &m.id,
            FeedItem::UpcomingCarousel(c) => &c.id,
            FeedItem::NewsArticle(a) => &a.id,
            FeedItem::VideoHighlight(v) => &v.id,
            FeedItem::MatchResult(r) => &r.id,
            FeedItem::BannerAd(b) => &b.id,
        }
    }

    /// Server timestamp in epoch milliseconds. Display hint only; the
    /// server defines collection order.
    pub fn timestamp(&self) -> i64 {
        match self {
            FeedItem::LiveMatch(m) => m.timestamp,
            FeedItem::UpcomingCarousel(c) => c.timestamp,
            FeedItem::NewsArticle(a) => a.timestamp,
            FeedItem::VideoHighlight(v) => v.timestamp,
            FeedItem::MatchResult(r) => r.timestamp,
            FeedItem::BannerAd(b) => b.timestamp,
        }
    }
}
