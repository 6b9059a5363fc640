use super::errors::DomainError;
use super::record::TelemetryRecord;
use async_trait::async_trait;

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    async fn find_by_region(&self, region: &str) -> Result<Vec<TelemetryRecord>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}
