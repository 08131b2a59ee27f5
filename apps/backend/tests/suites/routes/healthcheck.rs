use actix_web::test;
use league_backend::infra::state::build_state;
use league_backend::AppError;
use serde_json::Value;

use crate::support::app_builder::create_test_app;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn health_reports_db_and_latest_migration() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251006_000001_weekly_scoring");
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
    Ok(())
}

#[actix_web::test]
async fn health_without_db_still_answers() -> Result<(), AppError> {
    let app = create_test_app(build_state().build().await?).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert!(body["db_error"].as_str().is_some());
    Ok(())
}

#[actix_web::test]
async fn root_answers() -> Result<(), AppError> {
    let app = create_test_app(build_state().build().await?).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    Ok(())
}
