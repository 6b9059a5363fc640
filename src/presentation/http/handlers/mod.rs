pub mod analyze;
pub mod preflight;
pub mod root;
