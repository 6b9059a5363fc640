pub mod dataset;
pub mod errors;
pub mod record;
pub mod repository;
pub mod stats;
