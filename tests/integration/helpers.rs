use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use latency_api::{
    application::analyze_latency::use_case::AnalyzeLatencyUseCase,
    config::Config,
    domain::telemetry::dataset::seed_records,
    infrastructure::repositories::in_memory_telemetry_repository::InMemoryTelemetryRepository,
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Build the full router over the seed dataset, exactly as the binary serves it.
pub fn spawn_app() -> Router {
    let repository = Arc::new(InMemoryTelemetryRepository::new(seed_records()));
    let state = AppState {
        analyzer: Arc::new(AnalyzeLatencyUseCase::new(repository)),
        config: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    };
    create_router(state)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone()
        .oneshot(req)
        .await
        .expect("router should produce a response")
}

pub async fn expect_status(res: Response, expected: StatusCode) -> Response {
    assert_eq!(res.status(), expected, "unexpected status code");
    res
}

pub async fn read_json<T: DeserializeOwned>(res: Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

pub fn analyze_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build analyze request")
}
