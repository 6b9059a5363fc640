use crate::{application::analyze_latency::use_case::AnalyzeLatencyUseCase, config::Config};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<AnalyzeLatencyUseCase>,
    pub config: Config,
}
