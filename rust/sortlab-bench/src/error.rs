//! Errors surfaced by the benchmark harness.

use std::path::PathBuf;

use sortlab_core::ParseAlgorithmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("cannot read '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in '{origin}': {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    UnknownAlgorithm(#[from] ParseAlgorithmError),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
