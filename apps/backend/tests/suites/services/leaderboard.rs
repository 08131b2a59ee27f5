use league_backend::db::require_db;
use league_backend::domain::Standing;
use league_backend::repos::leaderboards;
use league_backend::services::standings::StandingsService;
use league_backend::{AppError, ErrorCode};

use crate::support::fixtures::{
    seed_tournament, submit, ALL_FIVES, ALL_FOURS, ALL_THREES, WEEK,
};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn leaderboard_totals_and_ranking() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Ranking").await?;

    submit(&state, t, 10, ALL_FOURS).await?;
    submit(&state, t, 20, ALL_FIVES).await?;
    let report = submit(&state, t, 30, ALL_THREES).await?;
    assert_eq!(report.matches.written(), 3);
    assert_eq!(report.leaderboard.written(), 3);

    let board = StandingsService::new().get_leaderboard(db, t, WEEK).await?;
    let order: Vec<i64> = board.iter().map(|e| e.standing.player_id).collect();
    assert_eq!(order, vec![30, 10, 20]);

    let leader = &board[0].standing;
    assert_eq!(leader.total_hole_points, 9.0);
    assert_eq!(leader.total_round_points, 6.0);
    assert_eq!(leader.total_score, 15.0);
    assert_eq!(leader.matches_played, 2);
    assert_eq!(leader.matches_won, 2);
    assert_eq!(leader.total_match_bonus, 0.0);
    assert_eq!(leader.live_matches_played, 0);

    let middle = &board[1].standing;
    assert_eq!(middle.total_score, 7.5);
    assert_eq!((middle.matches_won, middle.matches_lost), (1, 1));

    let last = &board[2].standing;
    assert_eq!(last.total_score, 0.0);
    assert_eq!(last.matches_lost, 2);
    Ok(())
}

#[tokio::test]
async fn identical_cards_rank_by_player_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Twins").await?;

    submit(&state, t, 40, ALL_FOURS).await?;
    submit(&state, t, 7, ALL_FOURS).await?;

    let board = StandingsService::new().get_leaderboard(db, t, WEEK).await?;
    let order: Vec<i64> = board.iter().map(|e| e.standing.player_id).collect();
    assert_eq!(order, vec![7, 40]);
    for entry in &board {
        // Every hole halved: no hole points, half a point per round.
        assert_eq!(entry.standing.total_hole_points, 0.0);
        assert_eq!(entry.standing.total_round_points, 1.5);
        assert_eq!(entry.standing.matches_tied, 1);
    }
    Ok(())
}

#[tokio::test]
async fn player_matches_come_back_oldest_first() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "History").await?;

    submit(&state, t, 10, ALL_FOURS).await?;
    submit(&state, t, 20, ALL_FIVES).await?;
    submit(&state, t, 30, ALL_THREES).await?;

    let service = StandingsService::new();
    let mine = service.get_matches_for_player(db, t, WEEK, 10).await?;
    let opponents: Vec<i64> = mine
        .iter()
        .map(|m| {
            if m.player1.player_id == 10 {
                m.player2.player_id
            } else {
                m.player1.player_id
            }
        })
        .collect();
    assert_eq!(opponents, vec![20, 30]);

    assert!(service
        .get_matches_for_player(db, t, WEEK, 99)
        .await?
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn reads_require_a_known_tournament() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let service = StandingsService::new();

    let err = service.get_leaderboard(db, 777, WEEK).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::TournamentNotFound);

    let err = service
        .get_matches_for_player(db, 777, WEEK, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TournamentNotFound);
    Ok(())
}

#[tokio::test]
async fn equal_totals_rank_by_hole_points_then_player_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let t = seed_tournament(&state, "Tiebreak").await?;

    let standing = |player_id, hole: f64, round: f64| Standing {
        player_id,
        total_hole_points: hole,
        total_round_points: round,
        total_score: hole + round,
        matches_played: 1,
        ..Default::default()
    };
    for row in [
        standing(4, 1.0, 2.0),
        standing(6, 1.0, 2.0),
        standing(5, 2.0, 1.0),
        standing(8, 2.0, 2.0),
    ] {
        leaderboards::upsert(db, t, WEEK, &row).await?;
    }

    let board = StandingsService::new().get_leaderboard(db, t, WEEK).await?;
    let order: Vec<i64> = board.iter().map(|e| e.standing.player_id).collect();
    assert_eq!(order, vec![8, 5, 4, 6]);
    Ok(())
}
