//! Error types for file-renamer.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run before any file is renamed.
///
/// Per-file rename failures are not errors at this level; they are recorded
/// as [`RenameOutcome::Failed`](crate::ops::RenameOutcome::Failed) and the
/// batch continues.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Bad command line, or an explicit `--help` request.
    ///
    /// Carries the fully rendered message including the usage block.
    #[error("{0}")]
    Usage(String),

    /// Extension argument rejected after normalization.
    #[error("Invalid extension '{0}': {1}")]
    InvalidExtension(String, String),

    /// Directory argument missing or not a directory.
    #[error("Invalid path '{path}': {1}", path = .0.display())]
    InvalidPath(PathBuf, String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RenameError {
    /// Returns true for errors that should be shown as bare usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, RenameError::Usage(_))
    }
}

/// Result type alias for file-renamer operations.
pub type Result<T> = std::result::Result<T, RenameError>;
