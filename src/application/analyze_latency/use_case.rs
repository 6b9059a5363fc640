use super::dto::{AnalyzeResponse, RegionSummary};
use crate::domain::telemetry::{
    errors::DomainError,
    repository::TelemetryRepository,
    stats::{mean, percentile, round2},
};
use std::sync::Arc;

/// Computes per-region latency/uptime summaries over the fixed record set.
///
/// Purely functional over the immutable data behind the repository: every call
/// allocates a fresh response and no input is treated as an error. Unknown or
/// empty region names simply produce zero-filled summaries.
pub struct AnalyzeLatencyUseCase {
    repository: Arc<dyn TelemetryRepository>,
}

impl AnalyzeLatencyUseCase {
    pub fn new(repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        regions: &[String],
        threshold_ms: f64,
    ) -> Result<AnalyzeResponse, DomainError> {
        let mut summaries = Vec::with_capacity(regions.len());
        for region in regions {
            summaries.push(self.summarize(region, threshold_ms).await?);
        }
        Ok(AnalyzeResponse {
            regions: summaries,
            threshold_ms,
            total_regions: regions.len(),
        })
    }

    async fn summarize(
        &self,
        region: &str,
        threshold_ms: f64,
    ) -> Result<RegionSummary, DomainError> {
        let records = self.repository.find_by_region(region).await?;
        if records.is_empty() {
            return Ok(RegionSummary::zeroed(region.to_string()));
        }

        let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
        let uptimes: Vec<f64> = records.iter().map(|r| r.uptime_pct).collect();

        Ok(RegionSummary {
            region: region.to_string(),
            avg_latency: round2(mean(&latencies)),
            p95_latency: round2(percentile(&latencies, 95.0)),
            avg_uptime: round2(mean(&uptimes)),
            breaches: latencies.iter().filter(|&&l| l > threshold_ms).count(),
        })
    }
}
