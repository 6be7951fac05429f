//! Error types for metaforge subsystems.
//!
//! Provisioning and aggregation carry their own error enums; the pipeline
//! and CLI layers use `anyhow::Result` and bubble these up.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while provisioning a bug working directory.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// A helper script is missing from the scripts directory. Fatal: the
    /// bug directory cannot be seeded, so the whole run aborts.
    #[error("Helper script '{script}' not found at {path}")]
    MissingHelperScript { script: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while writing the metadata document.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
