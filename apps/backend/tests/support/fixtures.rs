//! Seeding helpers shared by the service and route suites.

use league_backend::db::require_db;
use league_backend::domain::HoleInput;
use league_backend::services::reports::SubmissionReport;
use league_backend::services::scorecards::{ScoreSubmission, ScorecardService};
use league_backend::services::tournaments::TournamentService;
use league_backend::state::app_state::AppState;
use league_backend::AppError;
use time::macros::date;
use time::Date;

/// A Monday, so it is already a week start.
pub const WEEK: Date = date!(2025 - 10 - 06);

pub const ALL_FOURS: [i64; 9] = [4; 9];
pub const ALL_FIVES: [i64; 9] = [5; 9];
pub const ALL_THREES: [i64; 9] = [3; 9];

/// Zero entries are sent as unset holes.
pub fn holes(strokes: [i64; 9]) -> Vec<HoleInput> {
    strokes
        .iter()
        .map(|&s| if s == 0 { HoleInput::Unset } else { HoleInput::Strokes(s) })
        .collect()
}

pub fn submission(tournament_id: i64, player_id: i64, strokes: [i64; 9]) -> ScoreSubmission {
    ScoreSubmission {
        tournament_id,
        player_id,
        week_start_date: WEEK,
        holes: holes(strokes),
        is_live: false,
        group_tag: None,
    }
}

pub async fn seed_tournament(state: &AppState, name: &str) -> Result<i64, AppError> {
    let db = require_db(state)?;
    let tournament = TournamentService::new().create_tournament(db, name).await?;
    Ok(tournament.id)
}

pub async fn submit(
    state: &AppState,
    tournament_id: i64,
    player_id: i64,
    strokes: [i64; 9],
) -> Result<SubmissionReport, AppError> {
    let db = require_db(state)?;
    ScorecardService::new()
        .submit(
            db,
            state.recompute_locks(),
            submission(tournament_id, player_id, strokes),
        )
        .await
}
