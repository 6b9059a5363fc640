use serde::{Deserialize, Serialize};

/// Analysis request: which regions to summarize and the latency threshold used
/// for breach counting. Duplicate and unknown regions are permitted.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

/// Aggregated statistics for one requested region.
///
/// All floating-point fields are rounded to two decimal places. A region with
/// no matching records yields an all-zero summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: usize,
}

impl RegionSummary {
    pub fn zeroed(region: String) -> Self {
        Self {
            region,
            avg_latency: 0.0,
            p95_latency: 0.0,
            avg_uptime: 0.0,
            breaches: 0,
        }
    }
}

/// Full analysis response. `regions` preserves request order (duplicates
/// included); `threshold_ms` echoes the request; `total_regions` is the length
/// of the requested region list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub regions: Vec<RegionSummary>,
    pub threshold_ms: f64,
    pub total_regions: usize,
}
