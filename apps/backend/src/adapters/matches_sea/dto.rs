//! DTOs for matches_sea adapter.

use time::Date;

/// Computed match row keyed by (tournament, week, player1, player2).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchUpsert {
    pub tournament_id: i64,
    pub week_start_date: Date,
    pub player1_id: i64,
    pub player2_id: i64,
    pub player1_scorecard_id: i64,
    pub player2_scorecard_id: i64,
    pub hole_points: [f64; 2],
    pub round1_points: [f64; 2],
    pub round2_points: [f64; 2],
    pub round3_points: [f64; 2],
    pub live_bonus: [f64; 2],
    pub total_points: [f64; 2],
    pub match_winner_id: Option<i64>,
}
