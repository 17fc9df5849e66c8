//! Error types for namecheck
//!
//! Probe failures never reach this type; they are absorbed as
//! `ProbeOutcome::Failed`. These errors stop a run: setup problems before
//! probing, report problems after it.

use thiserror::Error;

/// Run-level error
#[derive(Debug, Error)]
pub enum CheckerError {
    /// IO error (names file, report files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV report writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Shared HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// namecheck-common error (configuration, input)
    #[error("Common error: {0}")]
    Common(#[from] namecheck_common::Error),
}

/// Result type for run-level operations
pub type CheckerResult<T> = Result<T, CheckerError>;
