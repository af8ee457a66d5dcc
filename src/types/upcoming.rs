use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::MatchFormat;

/// A team reference inside an upcoming fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub short_name: String,
}

/// An upcoming fixture.
///
/// Appears both as a read-only preview inside the main feed's carousel and
/// as the element type of the standalone upcoming-matches collection. The
/// two copies are value-equal, never reference-shared; `match_id` is the
/// identity used for deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMatch {
    pub match_id: i64,
    pub title: String,
    pub venue: String,
    pub start_time: DateTime<Utc>,
    pub home_team: Team,
    pub away_team: Team,
    pub match_type: MatchFormat,
    pub series_name: String,
    #[serde(default)]
    pub notifications_enabled: bool,
}
