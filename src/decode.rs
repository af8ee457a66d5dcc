//! Raw item decoding.
//!
//! Converts type-tagged wire items into the closed [`FeedItem`] set. An
//! unknown tag or a payload that fails to parse never aborts the batch:
//! the item is dropped with one diagnostic log line and the rest of the
//! page is processed normally.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::types::{
    BannerAd, FeedItem, LiveMatch, MatchFormat, MatchResult, NewsArticle, RawItem, TeamScore,
    UpcomingCarousel, UpcomingMatch, VideoHighlight,
};

/// Wire type tags of the known feed item variants.
mod tag {
    pub const LIVE_MATCH: &str = "liveMatch";
    pub const UPCOMING_CAROUSEL: &str = "upcomingCarousel";
    pub const NEWS_ARTICLE: &str = "newsArticle";
    pub const VIDEO_HIGHLIGHT: &str = "videoHighlight";
    pub const MATCH_RESULT: &str = "matchResult";
    pub const BANNER_AD: &str = "bannerAd";
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LiveMatchPayload {
    series_name: String,
    match_type: MatchFormat,
    venue: String,
    status: String,
    home: TeamScore,
    away: TeamScore,
    #[serde(default)]
    run_rate: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpcomingCarouselPayload {
    title: String,
    total_count: u64,
    preview_items: Vec<UpcomingMatch>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsArticlePayload {
    headline: String,
    summary: String,
    image_url: String,
    #[serde(default)]
    read_time_minutes: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoHighlightPayload {
    title: String,
    thumbnail_url: String,
    duration_seconds: u32,
    #[serde(default)]
    view_count: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchResultPayload {
    series_name: String,
    match_type: MatchFormat,
    result: String,
    home: TeamScore,
    away: TeamScore,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BannerAdPayload {
    image_url: String,
    target_url: String,
}

fn payload<P: DeserializeOwned>(raw: &RawItem) -> serde_json::Result<P> {
    serde_json::from_value(raw.payload.clone())
}

/// Decode one raw item into a [`FeedItem`], or `None` if unrecognized.
///
/// Never fails: an unknown tag or malformed payload logs a warning and is
/// skipped, so the caller can keep the rest of the page.
pub fn decode_item(raw: &RawItem) -> Option<FeedItem> {
    let decoded = match raw.kind.as_str() {
        tag::LIVE_MATCH => payload::<LiveMatchPayload>(raw).map(|p| {
            FeedItem::LiveMatch(LiveMatch {
                id: raw.id.clone(),
                timestamp: raw.timestamp,
                series_name: p.series_name,
                match_type: p.match_type,
                venue: p.venue,
                status: p.status,
                home: p.home,
                away: p.away,
                run_rate: p.run_rate,
            })
        }),
        tag::UPCOMING_CAROUSEL => payload::<UpcomingCarouselPayload>(raw).map(|p| {
            FeedItem::UpcomingCarousel(UpcomingCarousel {
                id: raw.id.clone(),
                timestamp: raw.timestamp,
                title: p.title,
                total_count: p.total_count,
                preview_items: p.preview_items,
            })
        }),
        tag::NEWS_ARTICLE => payload::<NewsArticlePayload>(raw).map(|p| {
            FeedItem::NewsArticle(NewsArticle {
                id: raw.id.clone(),
                timestamp: raw.timestamp,
                headline: p.headline,
                summary: p.summary,
                image_url: p.image_url,
                read_time_minutes: p.read_time_minutes,
            })
        }),
        tag::VIDEO_HIGHLIGHT => payload::<VideoHighlightPayload>(raw).map(|p| {
            FeedItem::VideoHighlight(VideoHighlight {
                id: raw.id.clone(),
                timestamp: raw.timestamp,
                title: p.title,
                thumbnail_url: p.thumbnail_url,
                duration_seconds: p.duration_seconds,
                view_count: p.view_count,
            })
        }),
        tag::MATCH_RESULT => payload::<MatchResultPayload>(raw).map(|p| {
            FeedItem::MatchResult(MatchResult {
                id: raw.id.clone(),
                timestamp: raw.timestamp,
                series_name: p.series_name,
                match_type: p.match_type,
                result: p.result,
                home: p.home,
                away: p.away,
            })
        }),
        tag::BANNER_AD => payload::<BannerAdPayload>(raw).map(|p| {
            FeedItem::BannerAd(BannerAd {
                id: raw.id.clone(),
                timestamp: raw.timestamp,
                image_url: p.image_url,
                target_url: p.target_url,
            })
        }),
        other => {
            warn!(id = %raw.id, tag = %other, "skipping item with unknown type tag");
            return None;
        }
    };

    match decoded {
        Ok(item) => Some(item),
        Err(e) => {
            warn!(id = %raw.id, tag = %raw.kind, error = %e, "skipping item with malformed payload");
            None
        }
    }
}

/// Decode a whole raw page, preserving input order and dropping anything
/// [`decode_item`] rejects.
pub fn decode_page(items: &[RawItem]) -> Vec<FeedItem> {
    items.iter().filter_map(decode_item).collect()
}

/// Decode a results page, keeping only `matchResult` entries.
pub fn decode_results_page(items: &[RawItem]) -> Vec<MatchResult> {
    items
        .iter()
        .filter_map(|raw| match decode_item(raw)? {
            FeedItem::MatchResult(r) => Some(r),
            other => {
                warn!(id = %other.id(), "skipping non-result item in results page");
                None
            }
        })
        .collect()
}
