use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
