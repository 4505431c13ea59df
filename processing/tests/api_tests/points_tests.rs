use std::sync::Arc;
use axum::http::StatusCode;
use common::test_helpers::{TestResult, fixtures, test_utils};
use common::test_assert_eq;

use super::mocks::{
    MockScoreStorage, create_in_memory_app, create_test_app, points, process,
    response_body_string, send,
};

#[tokio::test]
async fn test_unknown_id_is_not_found() -> TestResult {
    let app = create_in_memory_app();
    process(&app, &fixtures::target_receipt()).await?;

    let uri = "/receipts/7fb1377b-b223-49d9-a31a-5a02701dd310/points";
    let response = send(&app, "GET", uri, None).await?;

    test_utils::check_status_code(response.status(), StatusCode::NOT_FOUND)?;
    let body = test_utils::parse_json(&response_body_string(response).await?)?;
    test_assert_eq!(body["code"], "NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn test_lookup_is_repeatable() -> TestResult {
    let app = create_in_memory_app();
    let id = process(&app, &fixtures::corner_market_receipt()).await?;

    test_assert_eq!(points(&app, &id).await?, 112);
    test_assert_eq!(points(&app, &id).await?, 112);

    Ok(())
}

#[tokio::test]
async fn test_lookup_uses_path_id() -> TestResult {
    let mut storage = MockScoreStorage::new();
    storage
        .expect_get()
        .withf(|id| id.to_string() == "abc-123")
        .times(1)
        .returning(|_| Ok(Some(42)));
    let app = create_test_app(Arc::new(storage));

    test_assert_eq!(points(&app, "abc-123").await?, 42);

    Ok(())
}

#[tokio::test]
async fn test_storage_failure_on_lookup_is_internal_error() -> TestResult {
    let mut storage = MockScoreStorage::new();
    storage
        .expect_get()
        .returning(|_| Err("storage unavailable".into()));
    let app = create_test_app(Arc::new(storage));

    let response = send(&app, "GET", "/receipts/abc/points", None).await?;

    test_utils::check_status_code(response.status(), StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(())
}

#[tokio::test]
async fn test_health_check() -> TestResult {
    let app = create_in_memory_app();

    let response = send(&app, "GET", "/health", None).await?;

    test_utils::check_status_code(response.status(), StatusCode::OK)?;
    test_assert_eq!(response_body_string(response).await?, "OK");

    Ok(())
}
