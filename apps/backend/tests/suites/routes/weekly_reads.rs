use actix_web::http::StatusCode;
use actix_web::test;
use league_backend::AppError;
use serde_json::{json, Value};

use crate::support::app_builder::create_test_app;
use crate::support::fixtures::{seed_tournament, submit, ALL_FIVES, ALL_FOURS, ALL_THREES};
use crate::support::test_state::build_test_state;

const WEEK_QUERY: &str = "week_start_date=2025-10-06";

#[actix_web::test]
async fn leaderboard_is_ranked() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "Board").await?;
    submit(&state, t, 10, ALL_FOURS).await?;
    submit(&state, t, 20, ALL_FIVES).await?;
    submit(&state, t, 30, ALL_THREES).await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{t}/weekly-leaderboard?{WEEK_QUERY}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["week_start_date"], "2025-10-06");
    let entries = body["entries"].as_array().expect("entries array");
    let ranked: Vec<(u64, i64)> = entries
        .iter()
        .map(|e| {
            (
                e["rank"].as_u64().unwrap_or_default(),
                e["player_id"].as_i64().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(ranked, vec![(1, 30), (2, 10), (3, 20)]);
    assert_eq!(entries[0]["total_score"], 15.0);
    assert_eq!(entries[0]["matches_won"], 2);
    Ok(())
}

#[actix_web::test]
async fn empty_week_has_empty_leaderboard() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "Quiet week").await?;
    let app = create_test_app(state).await;

    // No week given: the current week is used.
    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{t}/weekly-leaderboard"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["entries"], json!([]));
    Ok(())
}

#[actix_web::test]
async fn player_matches_show_both_sides() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "Matches").await?;
    submit(&state, t, 1, [3, 3, 3, 5, 5, 5, 4, 4, 4]).await?;
    submit(&state, t, 2, [5, 5, 5, 3, 3, 3, 4, 4, 4]).await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/tournaments/{t}/players/2/weekly-matches?{WEEK_QUERY}"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().expect("match list");
    assert_eq!(rows.len(), 1);
    let m = &rows[0];
    assert_eq!(m["player1"]["player_id"], 1);
    assert_eq!(m["player2"]["player_id"], 2);
    assert!(m["match_winner_id"].is_null());
    assert_eq!(m["player1"]["round_points"], json!([1.0, 0.0, 0.5]));
    assert_eq!(m["player2"]["total_points"], 3.0);
    assert_eq!(m["week_start_date"], "2025-10-06");
    Ok(())
}

#[actix_web::test]
async fn manual_recompute_returns_summary() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "Recompute").await?;
    submit(&state, t, 1, ALL_FOURS).await?;
    submit(&state, t, 2, ALL_FIVES).await?;
    submit(&state, t, 3, [4, 4, 0, 0, 0, 0, 0, 0, 0]).await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{t}/weekly-recompute?{WEEK_QUERY}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["week_start_date"], "2025-10-06");
    assert_eq!(body["matches"]["written"], 1);
    // Player 3 shares only two holes with each opponent.
    assert_eq!(body["matches"]["skipped"], 2);
    assert_eq!(body["matches"]["failed"], 0);
    assert_eq!(body["leaderboard"]["written"], 2);
    assert_eq!(body["clean"], true);
    Ok(())
}

#[actix_web::test]
async fn unknown_tournament_on_every_route() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).await;

    let requests = [
        test::TestRequest::get().uri("/api/tournaments/404/weekly-leaderboard"),
        test::TestRequest::get().uri("/api/tournaments/404/players/1/weekly-matches"),
        test::TestRequest::get().uri("/api/tournaments/404/players/1/weekly-scorecard"),
        test::TestRequest::post().uri("/api/tournaments/404/weekly-recompute"),
    ];
    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "TOURNAMENT_NOT_FOUND");
    }
    Ok(())
}
