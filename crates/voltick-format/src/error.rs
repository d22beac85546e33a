//! Formatting errors.

use thiserror::Error;

/// Errors that can occur while writing an artifact.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
