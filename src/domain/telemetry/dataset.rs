//! The fixed telemetry dataset the service aggregates over.
//!
//! Twelve daily observations per region for March 2025, covering a handful of
//! services in `apac`, `emea`, and `amer`. The values are part of the service
//! contract: summary statistics returned by the API are computed over exactly
//! this data.

use super::record::TelemetryRecord;

fn record(region: &str, service: &str, latency_ms: f64, uptime_pct: f64, timestamp: u32) -> TelemetryRecord {
    TelemetryRecord {
        region: region.to_string(),
        service: service.to_string(),
        latency_ms,
        uptime_pct,
        timestamp,
    }
}

/// Build the full seed dataset. Called once at startup; the result is shared
/// read-only for the lifetime of the process.
pub fn seed_records() -> Vec<TelemetryRecord> {
    vec![
        record("apac", "analytics", 197.32, 98.278, 20250301),
        record("apac", "recommendations", 206.54, 98.04, 20250302),
        record("apac", "support", 186.32, 97.397, 20250303),
        record("apac", "checkout", 189.95, 97.227, 20250304),
        record("apac", "payments", 182.06, 98.346, 20250305),
        record("apac", "payments", 213.32, 99.126, 20250306),
        record("apac", "analytics", 112.05, 97.307, 20250307),
        record("apac", "catalog", 186.49, 99.281, 20250308),
        record("apac", "support", 205.84, 97.436, 20250309),
        record("apac", "checkout", 165.17, 98.891, 20250310),
        record("apac", "checkout", 126.26, 98.9, 20250311),
        record("apac", "support", 165.12, 99.301, 20250312),
        record("emea", "payments", 126.41, 99.169, 20250301),
        record("emea", "checkout", 192.06, 98.3, 20250302),
        record("emea", "support", 193.82, 97.235, 20250303),
        record("emea", "support", 205.62, 98.515, 20250304),
        record("emea", "catalog", 184.76, 98.652, 20250305),
        record("emea", "support", 129.74, 99.365, 20250306),
        record("emea", "catalog", 141.99, 97.861, 20250307),
        record("emea", "checkout", 140.2, 98.959, 20250308),
        record("emea", "recommendations", 136.9, 97.209, 20250309),
        record("emea", "checkout", 151.26, 98.907, 20250310),
        record("emea", "checkout", 159.53, 98.489, 20250311),
        record("emea", "analytics", 136.05, 97.543, 20250312),
        record("amer", "payments", 163.47, 99.375, 20250301),
        record("amer", "support", 167.37, 97.512, 20250302),
        record("amer", "payments", 186.85, 97.31, 20250303),
        record("amer", "analytics", 184.97, 97.333, 20250304),
        record("amer", "payments", 219.35, 99.423, 20250305),
        record("amer", "catalog", 175.77, 97.652, 20250306),
        record("amer", "payments", 205.36, 98.193, 20250307),
        record("amer", "recommendations", 212.6, 99.294, 20250308),
        record("amer", "catalog", 198.46, 97.919, 20250309),
        record("amer", "checkout", 110.19, 99.105, 20250310),
        record("amer", "support", 231.76, 97.216, 20250311),
        record("amer", "support", 182.55, 98.595, 20250312),
    ]
}
