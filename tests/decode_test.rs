//! Decoder tests over realistic JSON fixtures.
//!
//! Each fixture mirrors what the content API actually sends: a type-tagged
//! envelope entry with a camelCase payload. Unknown tags and malformed
//! payloads must be dropped without failing the batch.

use crickfeed::types::*;
use crickfeed::{decode_item, decode_page, decode_results_page};

fn raw(json: &str) -> RawItem {
    serde_json::from_str(json).unwrap()
}

// ---------------------------------------------------------------------------
// LiveMatch
// ---------------------------------------------------------------------------

#[test]
fn test_live_match_decodes_all_fields() {
    let item = raw(r#"{
        "type": "liveMatch",
        "id": "lm-1001",
        "timestamp": 1755000000000,
        "payload": {
            "seriesName": "Border-Gavaskar Trophy",
            "matchType": "test",
            "venue": "Melbourne Cricket Ground",
            "status": "India need 54 runs in 32 balls",
            "home": {"name": "Australia", "shortName": "AUS", "score": "287/6", "overs": "81.3"},
            "away": {"name": "India", "shortName": "IND", "score": "312"},
            "runRate": 3.54
        }
    }"#);

    let decoded = decode_item(&item).unwrap();
    let FeedItem::LiveMatch(m) = decoded else {
        panic!("expected LiveMatch, got {decoded:?}");
    };
    assert_eq!(m.id, "lm-1001");
    assert_eq!(m.timestamp, 1755000000000);
    assert_eq!(m.series_name, "Border-Gavaskar Trophy");
    assert_eq!(m.match_type, MatchFormat::Test);
    assert_eq!(m.home.short_name, "AUS");
    assert_eq!(m.home.score.as_deref(), Some("287/6"));
    assert_eq!(m.home.overs.as_deref(), Some("81.3"));
    assert_eq!(m.away.overs, None);
    assert_eq!(m.run_rate, Some(3.54));
}

#[test]
fn test_live_match_missing_run_rate_defaults_to_none() {
    let item = raw(r#"{
        "type": "liveMatch",
        "id": "lm-1002",
        "timestamp": 1755000000000,
        "payload": {
            "seriesName": "Asia Cup",
            "matchType": "t20",
            "venue": "Dubai",
            "status": "Innings break",
            "home": {"name": "Pakistan", "shortName": "PAK"},
            "away": {"name": "Sri Lanka", "shortName": "SL"}
        }
    }"#);

    let FeedItem::LiveMatch(m) = decode_item(&item).unwrap() else {
        panic!("expected LiveMatch");
    };
    assert_eq!(m.run_rate, None);
    assert_eq!(m.match_type, MatchFormat::T20);
    assert_eq!(m.home.score, None);
}

// ---------------------------------------------------------------------------
// UpcomingCarousel
// ---------------------------------------------------------------------------

#[test]
fn test_carousel_decodes_preview_items() {
    let item = raw(r#"{
        "type": "upcomingCarousel",
        "id": "car-1",
        "timestamp": 1755000100000,
        "payload": {
            "title": "Upcoming Matches",
            "totalCount": 48,
            "previewItems": [
                {
                    "matchId": 9001,
                    "title": "AUS vs IND, 3rd ODI",
                    "venue": "SCG",
                    "startTime": "2025-03-01T09:00:00Z",
                    "homeTeam": {"name": "Australia", "shortName": "AUS"},
                    "awayTeam": {"name": "India", "shortName": "IND"},
                    "matchType": "odi",
                    "seriesName": "AUS v IND ODI Series",
                    "notificationsEnabled": true
                },
                {
                    "matchId": 9002,
                    "title": "ENG vs NZ, 1st Test",
                    "venue": "Lord's",
                    "startTime": "2025-03-04T10:00:00Z",
                    "homeTeam": {"name": "England", "shortName": "ENG"},
                    "awayTeam": {"name": "New Zealand", "shortName": "NZ"},
                    "matchType": "test",
                    "seriesName": "ENG v NZ Test Series"
                }
            ]
        }
    }"#);

    let FeedItem::UpcomingCarousel(c) = decode_item(&item).unwrap() else {
        panic!("expected UpcomingCarousel");
    };
    assert_eq!(c.title, "Upcoming Matches");
    assert_eq!(c.total_count, 48);
    assert_eq!(c.preview_items.len(), 2);
    assert_eq!(c.preview_items[0].match_id, 9001);
    assert!(c.preview_items[0].notifications_enabled);
    // notificationsEnabled omitted → defaults off.
    assert!(!c.preview_items[1].notifications_enabled);
    assert_eq!(c.preview_items[1].match_type, MatchFormat::Test);
}

// ---------------------------------------------------------------------------
// NewsArticle / VideoHighlight / MatchResult / BannerAd
// ---------------------------------------------------------------------------

#[test]
fn test_news_article_round_trip_of_optionals() {
    let with_read_time = raw(r#"{
        "type": "newsArticle",
        "id": "news-1",
        "timestamp": 1755000200000,
        "payload": {
            "headline": "Spin clinic at the MCG",
            "summary": "A dramatic final session.",
            "imageUrl": "https://cdn.example/news-1.jpg",
            "readTimeMinutes": 4
        }
    }"#);
    let FeedItem::NewsArticle(a) = decode_item(&with_read_time).unwrap() else {
        panic!("expected NewsArticle");
    };
    assert_eq!(a.read_time_minutes, Some(4));

    let without = raw(r#"{
        "type": "newsArticle",
        "id": "news-2",
        "timestamp": 1755000200000,
        "payload": {
            "headline": "Squad announced",
            "summary": "Two debutants named.",
            "imageUrl": "https://cdn.example/news-2.jpg"
        }
    }"#);
    let FeedItem::NewsArticle(a) = decode_item(&without).unwrap() else {
        panic!("expected NewsArticle");
    };
    assert_eq!(a.read_time_minutes, None);
}

#[test]
fn test_video_highlight_decodes() {
    let item = raw(r#"{
        "type": "videoHighlight",
        "id": "vid-1",
        "timestamp": 1755000300000,
        "payload": {
            "title": "All six sixes",
            "thumbnailUrl": "https://cdn.example/vid-1.jpg",
            "durationSeconds": 95,
            "viewCount": 120345
        }
    }"#);

    let FeedItem::VideoHighlight(v) = decode_item(&item).unwrap() else {
        panic!("expected VideoHighlight");
    };
    assert_eq!(v.duration_seconds, 95);
    assert_eq!(v.view_count, Some(120345));
}

#[test]
fn test_match_result_decodes() {
    let item = raw(r#"{
        "type": "matchResult",
        "id": "res-1",
        "timestamp": 1755000400000,
        "payload": {
            "seriesName": "The Ashes",
            "matchType": "test",
            "result": "Australia won by 5 wickets",
            "home": {"name": "Australia", "shortName": "AUS", "score": "301/5"},
            "away": {"name": "England", "shortName": "ENG", "score": "297"}
        }
    }"#);

    let FeedItem::MatchResult(r) = decode_item(&item).unwrap() else {
        panic!("expected MatchResult");
    };
    assert_eq!(r.result, "Australia won by 5 wickets");
    assert_eq!(r.home.score.as_deref(), Some("301/5"));
}

#[test]
fn test_banner_ad_decodes() {
    let item = raw(r#"{
        "type": "bannerAd",
        "id": "ad-1",
        "timestamp": 1755000500000,
        "payload": {
            "imageUrl": "https://ads.example/banner.png",
            "targetUrl": "https://sponsor.example"
        }
    }"#);

    let FeedItem::BannerAd(b) = decode_item(&item).unwrap() else {
        panic!("expected BannerAd");
    };
    assert_eq!(b.target_url, "https://sponsor.example");
}

// ---------------------------------------------------------------------------
// Unrecognized items
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_tag_is_skipped() {
    let item = raw(r#"{
        "type": "pollWidget",
        "id": "poll-1",
        "timestamp": 1755000600000,
        "payload": {"question": "Who wins?"}
    }"#);
    assert!(decode_item(&item).is_none());
}

#[test]
fn test_malformed_payload_is_skipped() {
    // durationSeconds has the wrong type; the item is dropped, not an error.
    let item = raw(r#"{
        "type": "videoHighlight",
        "id": "vid-bad",
        "timestamp": 1755000700000,
        "payload": {
            "title": "Broken clip",
            "thumbnailUrl": "https://cdn.example/broken.jpg",
            "durationSeconds": "ninety"
        }
    }"#);
    assert!(decode_item(&item).is_none());
}

#[test]
fn test_unknown_match_format_maps_to_other() {
    let item = raw(r#"{
        "type": "matchResult",
        "id": "res-2",
        "timestamp": 1755000800000,
        "payload": {
            "seriesName": "The Hundred",
            "matchType": "hundred",
            "result": "Fire won by 12 runs",
            "home": {"name": "Welsh Fire", "shortName": "FIR"},
            "away": {"name": "Oval Invincibles", "shortName": "OVI"}
        }
    }"#);

    let FeedItem::MatchResult(r) = decode_item(&item).unwrap() else {
        panic!("expected MatchResult");
    };
    assert_eq!(r.match_type, MatchFormat::Other);
}

// ---------------------------------------------------------------------------
// Whole-page decoding
// ---------------------------------------------------------------------------

fn news_raw(n: u32) -> String {
    format!(
        r#"{{
            "type": "newsArticle",
            "id": "news-{n}",
            "timestamp": 1755000900000,
            "payload": {{
                "headline": "Headline {n}",
                "summary": "Summary {n}",
                "imageUrl": "https://cdn.example/news-{n}.jpg"
            }}
        }}"#
    )
}

#[test]
fn test_clean_page_keeps_every_item_in_order() {
    let items: Vec<RawItem> = (0..6).map(|n| raw(&news_raw(n))).collect();
    let decoded = decode_page(&items);
    assert_eq!(decoded.len(), 6);
    let ids: Vec<&str> = decoded.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["news-0", "news-1", "news-2", "news-3", "news-4", "news-5"]);
}

#[test]
fn test_page_with_k_unrecognized_items_yields_n_minus_k() {
    let mut items: Vec<RawItem> = (0..4).map(|n| raw(&news_raw(n))).collect();
    items.insert(
        1,
        raw(r#"{"type": "pollWidget", "id": "poll-1", "timestamp": 0, "payload": {}}"#),
    );
    items.insert(
        3,
        raw(r#"{"type": "newsArticle", "id": "news-bad", "timestamp": 0, "payload": {"headline": 7}}"#),
    );

    // 6 raw, 2 unrecognized → 4 decoded, original relative order kept.
    let decoded = decode_page(&items);
    assert_eq!(decoded.len(), 4);
    let ids: Vec<&str> = decoded.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["news-0", "news-1", "news-2", "news-3"]);
}

#[test]
fn test_results_page_keeps_only_match_results() {
    let items = vec![
        raw(r#"{
            "type": "matchResult",
            "id": "res-10",
            "timestamp": 0,
            "payload": {
                "seriesName": "World Cup",
                "matchType": "odi",
                "result": "India won by 6 wickets",
                "home": {"name": "India", "shortName": "IND"},
                "away": {"name": "South Africa", "shortName": "SA"}
            }
        }"#),
        raw(&news_raw(99)),
        raw(r#"{"type": "scorecardTeaser", "id": "sc-1", "timestamp": 0, "payload": {}}"#),
    ];

    let decoded = decode_results_page(&items);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].id, "res-10");
    assert_eq!(decoded[0].match_type, MatchFormat::Odi);
}

// ---------------------------------------------------------------------------
// Envelope wire compatibility
// ---------------------------------------------------------------------------

#[test]
fn test_feed_envelope_round_trip() {
    let json = format!(
        r#"{{
            "items": [{}],
            "pagination": {{
                "currentPage": 2,
                "totalPages": 5,
                "totalItems": 90,
                "hasNext": true,
                "hasPrevious": true
            }}
        }}"#,
        news_raw(1)
    );

    let envelope: FeedPageEnvelope = serde_json::from_str(&json).unwrap();
    assert_eq!(envelope.items.len(), 1);
    assert_eq!(envelope.items[0].kind, "newsArticle");
    assert_eq!(envelope.pagination.current_page, 2);
    assert!(envelope.pagination.has_next);

    let serialized = serde_json::to_string(&envelope).unwrap();
    let envelope2: FeedPageEnvelope = serde_json::from_str(&serialized).unwrap();
    assert_eq!(envelope2.items[0].id, envelope.items[0].id);
    assert_eq!(envelope2.pagination.total_items, 90);
}
