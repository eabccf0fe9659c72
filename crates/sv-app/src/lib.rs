//! Shared application service layer for steamvessel.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing configuration handling, simulation execution, and result
//! querying.

pub mod config_service;
pub mod error;
pub mod progress;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use config_service::{ConfigFormat, ConfigOverrides, load_config, resolve_config, save_config};
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use query::{RunSummary, get_run_summary, to_csv};
pub use run_service::{RunRequest, RunResponse, RunTimingSummary, run, run_with_progress};
