use crate::domain::telemetry::{
    errors::DomainError, record::TelemetryRecord, repository::TelemetryRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Immutable in-process record store seeded once at startup.
///
/// The record set is shared read-only across all requests, so lookups need no
/// locking and concurrent handlers never coordinate.
pub struct InMemoryTelemetryRepository {
    records: Arc<Vec<TelemetryRecord>>,
}

impl InMemoryTelemetryRepository {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

#[async_trait]
impl TelemetryRepository for InMemoryTelemetryRepository {
    async fn find_by_region(&self, region: &str) -> Result<Vec<TelemetryRecord>, DomainError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.region == region)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.len())
    }
}
