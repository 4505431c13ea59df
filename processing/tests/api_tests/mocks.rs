use std::sync::Arc;
use async_trait::async_trait;
use axum::{Router, body::Body, http::{Request, StatusCode}, response::Response};
use mockall::mock;
use tower::ServiceExt;
use common::test_helpers::{TestError, TestResult, test_utils};
use processing::{
    executable_utils::router,
    model::{GenericError, ReceiptId},
    processor::ReceiptProcessor,
    scorers::receipt_scorer,
    storage::{InMemoryScoreStorage, ScoreStorage},
};

mock! {
    pub ScoreStorage {}

    #[async_trait]
    impl ScoreStorage for ScoreStorage {
        async fn save(&self, points: u64) -> Result<ReceiptId, GenericError>;
        async fn get(&self, id: &str) -> Result<Option<u64>, GenericError>;
        async fn count(&self) -> Result<usize, GenericError>;
    }
}

/// Router backed by the real scorer and the given storage
pub fn create_test_app(storage: Arc<dyn ScoreStorage>) -> Router {
    router(ReceiptProcessor::new(Arc::new(receipt_scorer()), storage))
}

/// Router backed by a fresh in-memory storage
pub fn create_in_memory_app() -> Router {
    create_test_app(Arc::new(InMemoryScoreStorage::new()))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> TestResult<Response> {
    let (parts, body) = test_utils::build_request(method, uri, body)?.into_parts();
    let request = Request::from_parts(parts, Body::from(body));

    app.clone().oneshot(request).await
        .map_err(|e| TestError::generic(format!("Request failed: {}", e)))
}

pub async fn response_body_string(response: Response) -> TestResult<String> {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await
        .map_err(|e| TestError::generic(format!("Failed to read response body: {}", e)))?;
    String::from_utf8(body_bytes.to_vec())
        .map_err(|e| TestError::generic(format!("Response body is not valid UTF-8: {}", e)))
}

/// Posts a receipt body as JSON
pub async fn post_receipt(app: &Router, receipt: &serde_json::Value) -> TestResult<Response> {
    let body = Some(test_utils::serialize_json(receipt)?);
    send(app, "POST", "/receipts/process", body).await
}

/// Submits a receipt and returns the issued id
pub async fn process(app: &Router, receipt: &serde_json::Value) -> TestResult<String> {
    let response = post_receipt(app, receipt).await?;
    test_utils::check_status_code(response.status(), StatusCode::OK)?;
    let body = test_utils::parse_json(&response_body_string(response).await?)?;
    body["id"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TestError::assertion_failure(format!("Response has no id: {}", body)))
}

/// Looks up the points for an id, expecting success
pub async fn points(app: &Router, id: &str) -> TestResult<u64> {
    let response = send(app, "GET", &format!("/receipts/{}/points", id), None).await?;
    test_utils::check_status_code(response.status(), StatusCode::OK)?;
    let body = test_utils::parse_json(&response_body_string(response).await?)?;
    body["points"]
        .as_u64()
        .ok_or_else(|| TestError::assertion_failure(format!("Response has no points: {}", body)))
}
