use serde::{Deserialize, Serialize};

/// Core domain entity representing a single service telemetry observation.
///
/// Each record captures one latency/uptime measurement for a named service in a
/// geographic region on a given day. The full record set is fixed at startup and
/// never mutated afterwards; every analysis request reads the same immutable data.
///
/// # Invariants
/// - `latency_ms` is non-negative
/// - `uptime_pct` lies in [0, 100]
/// - `timestamp` is an integer date encoding (YYYYMMDD)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetryRecord {
    /// Region identifier the measurement was taken in (e.g. "apac", "emea", "amer")
    pub region: String,

    /// Name of the measured service (e.g. "checkout", "payments")
    pub service: String,

    /// Observed request latency in milliseconds
    pub latency_ms: f64,

    /// Observed service uptime as a percentage
    pub uptime_pct: f64,

    /// Observation date encoded as YYYYMMDD
    pub timestamp: u32,
}
