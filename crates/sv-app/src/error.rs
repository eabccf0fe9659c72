//! Error types for the sv-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported config format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sv-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<sv_sim::SimError> for AppError {
    fn from(err: sv_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
