use league_backend::db::require_db;
use league_backend::domain::CanonicalPair;
use league_backend::entities::{weekly_leaderboards, weekly_matches};
use league_backend::repos::{matches, scorecards};
use league_backend::services::recompute::RecomputeService;
use league_backend::services::reports::PairOutcome;
use league_backend::services::scorecards::ScorecardService;
use league_backend::services::standings::StandingsService;
use league_backend::AppError;
use sea_orm::{EntityTrait, QueryOrder};
use time::macros::date;

use crate::support::fixtures::{
    seed_tournament, submission, submit, ALL_FIVES, ALL_FOURS, ALL_THREES, WEEK,
};
use crate::support::test_state::build_test_state;

fn pair(a: i64, b: i64) -> CanonicalPair {
    CanonicalPair::new(a, b).expect("distinct players")
}

#[tokio::test]
async fn match_rows_use_canonical_player_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Canonical").await?;

    submit(&state, t, 50, ALL_FOURS).await?;
    let report = submit(&state, t, 20, ALL_FIVES).await?;
    assert_eq!(report.matches.written(), 1);

    let rows = matches::find_all_for_week(db, t, WEEK).await?;
    assert_eq!(rows.len(), 1);
    let m = &rows[0];
    assert_eq!(m.player1.player_id, 20);
    assert_eq!(m.player2.player_id, 50);
    assert_eq!(m.match_winner_id, Some(50));
    assert_eq!(m.player2.hole_points, 4.5);
    assert_eq!(m.player2.round_points, [1.0, 1.0, 1.0]);
    assert_eq!(m.player2.total_points, 7.5);
    assert_eq!(m.player1.total_points, 0.0);
    assert_eq!(m.player1.live_bonus, 0.0);
    Ok(())
}

#[tokio::test]
async fn pair_needs_three_common_holes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Guard").await?;

    submit(&state, t, 2, ALL_FIVES).await?;
    let report = submit(&state, t, 1, [4, 4, 0, 0, 0, 0, 0, 0, 0]).await?;
    assert_eq!(report.matches.written(), 0);
    assert_eq!(
        report.matches.outcomes,
        vec![PairOutcome::InsufficientData {
            player1_id: 1,
            player2_id: 2,
            common_holes: 2,
        }]
    );
    assert!(matches::find_pair(db, t, WEEK, pair(1, 2)).await?.is_none());

    let report = submit(&state, t, 1, [0, 0, 4, 0, 0, 0, 0, 0, 0]).await?;
    assert_eq!(report.matches.written(), 1);

    let m = matches::find_pair(db, t, WEEK, pair(1, 2))
        .await?
        .expect("match written once three holes are common");
    // Player 1 sweeps round one; the unplayed rounds are halved.
    assert_eq!(m.player1.hole_points, 1.5);
    assert_eq!(m.player1.round_points, [1.0, 0.5, 0.5]);
    assert_eq!(m.player2.round_points, [0.0, 0.5, 0.5]);
    assert_eq!(m.player1.total_points, 3.5);
    assert_eq!(m.player2.total_points, 1.0);
    assert_eq!(m.match_winner_id, Some(1));
    Ok(())
}

#[tokio::test]
async fn one_round_each_and_a_half_is_a_tie() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Split").await?;

    submit(&state, t, 1, [3, 3, 3, 5, 5, 5, 4, 4, 4]).await?;
    submit(&state, t, 2, [5, 5, 5, 3, 3, 3, 4, 4, 4]).await?;

    let m = matches::find_pair(db, t, WEEK, pair(1, 2))
        .await?
        .expect("match row");
    assert_eq!(m.match_winner_id, None);
    assert_eq!(m.player1.round_points, [1.0, 0.0, 0.5]);
    assert_eq!(m.player2.round_points, [0.0, 1.0, 0.5]);
    assert_eq!(m.player1.total_points, 3.0);
    assert_eq!(m.player2.total_points, 3.0);
    Ok(())
}

#[tokio::test]
async fn repeated_recompute_leaves_rows_unchanged() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Idempotent").await?;

    submit(&state, t, 10, ALL_FOURS).await?;
    submit(&state, t, 20, ALL_FIVES).await?;
    submit(&state, t, 30, ALL_THREES).await?;

    let matches_before = weekly_matches::Entity::find()
        .order_by_asc(weekly_matches::Column::Id)
        .all(db)
        .await?;
    let board_before = weekly_leaderboards::Entity::find()
        .order_by_asc(weekly_leaderboards::Column::Id)
        .all(db)
        .await?;
    assert_eq!(matches_before.len(), 3);
    assert_eq!(board_before.len(), 3);

    let service = RecomputeService::new();
    for _ in 0..2 {
        let report = service
            .recompute_week(db, state.recompute_locks(), t, WEEK)
            .await?;
        assert!(report.is_clean());
        assert_eq!(report.matches.written(), 3);
        assert_eq!(report.leaderboard.written(), 3);
    }

    let matches_after = weekly_matches::Entity::find()
        .order_by_asc(weekly_matches::Column::Id)
        .all(db)
        .await?;
    let board_after = weekly_leaderboards::Entity::find()
        .order_by_asc(weekly_leaderboards::Column::Id)
        .all(db)
        .await?;
    assert_eq!(matches_before, matches_after);
    assert_eq!(board_before, board_after);
    Ok(())
}

#[tokio::test]
async fn weeks_and_tournaments_are_isolated() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t1 = seed_tournament(&state, "North").await?;
    let t2 = seed_tournament(&state, "South").await?;

    submit(&state, t1, 1, ALL_FOURS).await?;
    submit(&state, t1, 2, ALL_FIVES).await?;
    submit(&state, t2, 1, ALL_FIVES).await?;

    assert_eq!(matches::find_all_for_week(db, t1, WEEK).await?.len(), 1);
    assert!(matches::find_all_for_week(db, t2, WEEK).await?.is_empty());

    let next_week = WEEK + time::Duration::weeks(1);
    assert!(matches::find_all_for_week(db, t1, next_week).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn mid_week_dates_share_the_monday_key() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Midweek").await?;
    let service = ScorecardService::new();

    let mut wednesday = submission(t, 1, ALL_FOURS);
    wednesday.week_start_date = date!(2025 - 10 - 08);
    let report = service.submit(db, state.recompute_locks(), wednesday).await?;
    assert_eq!(report.scorecard.week_start_date, WEEK);

    let mut thursday = submission(t, 2, ALL_FOURS);
    thursday.week_start_date = date!(2025 - 10 - 09);
    let report = service.submit(db, state.recompute_locks(), thursday).await?;
    assert_eq!(report.matches.written(), 1);

    assert_eq!(scorecards::find_all_for_week(db, t, WEEK).await?.len(), 2);
    assert!(scorecards::find_all_for_week(db, t, date!(2025 - 10 - 08))
        .await?
        .is_empty());
    assert_eq!(matches::find_all_for_week(db, t, WEEK).await?.len(), 1);

    let card = service
        .get_scorecard(db, t, date!(2025 - 10 - 12), 1)
        .await?;
    assert_eq!(card.week_start_date, WEEK);

    let board = StandingsService::new()
        .get_leaderboard(db, t, date!(2025 - 10 - 10))
        .await?;
    assert_eq!(board.len(), 2);
    Ok(())
}
