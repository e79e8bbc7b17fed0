//! Error types for future-dates
//!
//! The scan pipeline itself never surfaces errors to the host (an
//! unreadable source file is dropped, an empty result is a valid
//! result); these types cover the host adapters and panel plumbing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in host adapters and panel operations
#[derive(Error, Debug)]
pub enum FutureDatesError {
    #[error("note not found: {path:?}")]
    NoteNotFound { path: PathBuf },

    #[error("navigation failed for {target}: {reason}")]
    NavigationFailed { target: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for future-dates operations
pub type Result<T> = std::result::Result<T, FutureDatesError>;
