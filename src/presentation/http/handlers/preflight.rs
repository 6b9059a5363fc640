use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct PreflightResponse {
    status: &'static str,
}

/// Catch-all OPTIONS handler. Browsers expect a 200 with permissive CORS
/// headers here; the headers themselves are applied by the CORS layer.
pub async fn options_handler() -> impl IntoResponse {
    Json(PreflightResponse { status: "OK" })
}
