use axum::{Json, extract::State};

use crate::{
    application::analyze_latency::dto::{AnalyzeRequest, AnalyzeResponse},
    presentation::http::{errors::AppError, state::AppState},
};

/// POST /analyze
///
/// Computes per-region latency/uptime summaries for the requested regions at
/// the given breach threshold. Unknown regions come back zero-filled rather
/// than failing the request.
pub async fn analyze_latency(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    tracing::debug!(
        regions = request.regions.len(),
        threshold_ms = request.threshold_ms,
        "analyzing latency"
    );
    let response = state
        .analyzer
        .execute(&request.regions, request.threshold_ms)
        .await?;
    Ok(Json(response))
}
