//! DTOs for scorecards_sea adapter.

use time::{Date, OffsetDateTime};

/// Full scorecard state to write for (player, tournament, week).
#[derive(Debug, Clone)]
pub struct ScorecardUpsert {
    pub player_id: i64,
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub hole_scores: serde_json::Value,
    pub total_score: i32,
    pub is_live: bool,
    pub group_tag: Option<String>,
    pub submitted_at: OffsetDateTime,
}
