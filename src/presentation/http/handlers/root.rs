use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

pub async fn read_root() -> impl IntoResponse {
    Json(RootResponse {
        message: "Latency API is running",
    })
}
