use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Dimension weights must sum to 100, got {0}")]
    WeightSum(f64),

    #[error("Weight for {dimension} must be a non-negative number, got {value}")]
    InvalidWeight { dimension: &'static str, value: f64 },

    #[error("Tier boundaries out of order: expected {0}")]
    TierOrder(&'static str),

    #[error("Failed to read scoring config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scoring config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Scoring task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
