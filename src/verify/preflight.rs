//! Pre-flight checks performed before scanning.
//!
//! Unlike `rules`, these functions touch the file system.

use crate::error::{RenameError, Result};
use std::fs;
use std::path::Path;

/// Ensures `path` exists and is a directory (following symlinks).
pub fn validate_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RenameError::InvalidPath(
            path.to_path_buf(),
            "not a directory".to_string(),
        )),
        Err(e) => {
            log::debug!("Cannot stat {}: {}", path.display(), e);
            Err(RenameError::InvalidPath(
                path.to_path_buf(),
                "no such directory".to_string(),
            ))
        }
    }
}
