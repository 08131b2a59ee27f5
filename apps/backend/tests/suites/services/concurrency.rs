use league_backend::db::require_db;
use league_backend::repos::matches;
use league_backend::services::standings::StandingsService;
use league_backend::AppError;

use crate::support::fixtures::{seed_tournament, submit, ALL_FIVES, ALL_FOURS, ALL_THREES, WEEK};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn concurrent_submissions_converge() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Rush").await?;

    let (a, b, c) = tokio::join!(
        submit(&state, t, 1, ALL_FOURS),
        submit(&state, t, 2, ALL_FIVES),
        submit(&state, t, 3, ALL_THREES),
    );
    a?;
    b?;
    c?;

    assert_eq!(matches::find_all_for_week(db, t, WEEK).await?.len(), 3);
    let board = StandingsService::new().get_leaderboard(db, t, WEEK).await?;
    assert_eq!(board.len(), 3);
    assert!(board.iter().all(|e| e.standing.matches_played == 2));
    assert_eq!(state.recompute_locks().tracked_weeks(), 1);
    Ok(())
}

#[tokio::test]
async fn same_player_racing_updates_keep_every_hole() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "Race").await?;

    let (a, b) = tokio::join!(
        submit(&state, t, 5, [4, 0, 0, 0, 0, 0, 0, 0, 0]),
        submit(&state, t, 5, [0, 5, 0, 0, 0, 0, 0, 0, 0]),
    );
    a?;
    let last = b?;
    // Whichever ran second saw the other's hole under the week lock.
    let db = require_db(&state)?;
    let card = league_backend::services::scorecards::ScorecardService::new()
        .get_scorecard(db, t, WEEK, 5)
        .await?;
    assert_eq!(card.hole_scores.set_count(), 2);
    assert_eq!(card.id, last.scorecard.id);
    Ok(())
}
