use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use league_backend::AppError;
use serde_json::{json, Value};

use crate::support::app_builder::create_test_app;
use crate::support::fixtures::seed_tournament;
use crate::support::test_state::build_test_state;

fn scorecard_uri(tournament_id: i64, player_id: i64) -> String {
    format!("/api/tournaments/{tournament_id}/players/{player_id}/weekly-scorecard?week_start_date=2025-10-09")
}

#[actix_web::test]
async fn submit_returns_the_stored_card() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "HTTP").await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri(&scorecard_uri(t, 4))
        .set_json(json!({
            "hole_scores": [4, null, 0, 5, 5.0, 3, 4, 4, 4],
            "is_live": true,
            "group_tag": " Front "
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["player_id"], 4);
    assert_eq!(body["tournament_id"], t);
    // Thursday normalizes to its Monday.
    assert_eq!(body["week_start_date"], "2025-10-06");
    assert_eq!(
        body["hole_scores"],
        json!([4, null, null, 5, 5, 3, 4, 4, 4])
    );
    assert_eq!(body["total_score"], 29);
    assert_eq!(body["is_live"], true);
    assert_eq!(body["group_tag"], "Front");
    Ok(())
}

#[actix_web::test]
async fn get_after_merge_shows_combined_holes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "HTTP merge").await?;
    let app = create_test_app(state).await;

    for holes in [
        json!([4, 4, null, null, null, null, null, null, null]),
        json!([0, 0, 6, null, null, null, null, null, null]),
    ] {
        let req = test::TestRequest::post()
            .uri(&scorecard_uri(t, 8))
            .set_json(json!({ "hole_scores": holes }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&scorecard_uri(t, 8))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["hole_scores"],
        json!([4, 4, 6, null, null, null, null, null, null])
    );
    assert_eq!(body["total_score"], 14);
    Ok(())
}

#[actix_web::test]
async fn score_validation_is_unprocessable() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "HTTP validation").await?;
    let app = create_test_app(state).await;

    let cases = [
        (json!([4, 4, 4]), "INVALID_HOLE_COUNT"),
        (json!([null, null, null, null, null, null, null, null, null]), "NO_HOLE_SCORES"),
        (json!([4, "5", 4, 4, 4, 4, 4, 4, 4]), "INVALID_HOLE_SCORE"),
        (json!([4, 4.5, 4, 4, 4, 4, 4, 4, 4]), "INVALID_HOLE_SCORE"),
        (json!([4, -3, 4, 4, 4, 4, 4, 4, 4]), "INVALID_HOLE_SCORE"),
        (json!([4, 256, 4, 4, 4, 4, 4, 4, 4]), "INVALID_HOLE_SCORE"),
        (json!([4, true, 4, 4, 4, 4, 4, 4, 4]), "INVALID_HOLE_SCORE"),
    ];
    for (holes, code) in cases {
        let req = test::TestRequest::post()
            .uri(&scorecard_uri(t, 2))
            .set_json(json!({ "hole_scores": holes }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            code,
            StatusCode::UNPROCESSABLE_ENTITY,
            None,
        )
        .await;
    }

    // Nothing was stored by the rejected submissions.
    let req = test::TestRequest::get()
        .uri(&scorecard_uri(t, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "SCORECARD_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_bodies_are_bad_requests() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "HTTP bodies").await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri(&scorecard_uri(t, 2))
        .insert_header(ContentType::json())
        .set_payload("{\"hole_scores\": [4, 4")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;

    let req = test::TestRequest::post()
        .uri(&scorecard_uri(t, 2))
        .set_json(json!({ "is_live": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;

    let req = test::TestRequest::post()
        .uri(&scorecard_uri(t, 2))
        .insert_header(ContentType::plaintext())
        .set_payload("4,4,4,4,4,4,4,4,4")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;
    Ok(())
}

#[actix_web::test]
async fn path_and_query_are_validated() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let t = seed_tournament(&state, "HTTP params").await?;
    let app = create_test_app(state).await;
    let body = json!({ "hole_scores": [4, 4, 4, 4, 4, 4, 4, 4, 4] });

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{t}/players/abc/weekly-scorecard"))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_PLAYER_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/tournaments/{t}/players/0/weekly-scorecard"))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_PLAYER_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/tournaments/{t}/players/3/weekly-scorecard?week_start_date=10-09-2025"
        ))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_WEEK",
        StatusCode::BAD_REQUEST,
        Some("10-09-2025"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/tournaments/9999/players/3/weekly-scorecard")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "TOURNAMENT_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/tournaments/-1/players/3/weekly-scorecard")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_TOURNAMENT_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    Ok(())
}
