//! Validation rules for extension arguments and file names.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{RenameError, Result};
use std::path::{Path, PathBuf};

/// Strips a single optional leading `.` from a user-supplied extension.
///
/// Case is preserved. An extension that is empty after stripping (`""` or
/// `"."`) is rejected, as is one containing a path separator, which could
/// never name a file in the same directory.
pub fn normalize_extension(raw: &str) -> Result<String> {
    let ext = raw.strip_prefix('.').unwrap_or(raw);

    if ext.is_empty() {
        return Err(RenameError::InvalidExtension(
            raw.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if ext.chars().any(std::path::is_separator) {
        return Err(RenameError::InvalidExtension(
            raw.to_string(),
            "cannot contain a path separator".to_string(),
        ));
    }

    Ok(ext.to_string())
}

/// Returns true if the file name of `path` has extension `ext`, ignoring
/// ASCII case.
///
/// The extension is whatever follows the last `.` of the file name. A name
/// whose only dot is its first character (`.gitignore`) has none.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|found| found.as_encoded_bytes().eq_ignore_ascii_case(ext.as_bytes()))
}

/// Computes the path `path` is renamed to when its extension becomes `ext`.
///
/// Only the final extension segment of the file name is replaced; a file
/// name without an extension gets `.ext` appended.
pub fn renamed_path(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext)
}
