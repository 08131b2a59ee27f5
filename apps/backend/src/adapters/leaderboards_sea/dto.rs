//! DTOs for leaderboards_sea adapter.

use time::Date;

/// Aggregated weekly totals for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingUpsert {
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub player_id: i64,
    pub total_hole_points: f64,
    pub total_round_points: f64,
    pub total_match_bonus: f64,
    pub total_score: f64,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_tied: i32,
    pub matches_lost: i32,
    pub live_matches_played: i32,
}
