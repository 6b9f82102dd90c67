//! Directory scanning for files with a given extension.
//!
//! Traversal is depth-first and pre-order in directory-listing order: files
//! are collected as they are encountered and subdirectories are entered as
//! soon as they are listed. Listing order is whatever the OS returns; nothing
//! is sorted.

use crate::verify::has_extension;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// What to look for and where.
#[derive(Debug, Clone)]
pub struct ScanOptions<'a> {
    pub root: &'a Path,
    /// Extension without leading dot, compared ignoring ASCII case.
    pub extension: &'a str,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Stop after this many matches.
    pub max_files: Option<usize>,
}

/// Result of a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Matching files in traversal order.
    pub files: Vec<PathBuf>,
    /// Set when `max_files` cut the scan short.
    pub truncated: bool,
}

/// Collects every regular file under `opts.root` whose extension matches.
///
/// Directories that cannot be read are skipped; they contribute nothing and
/// do not fail the scan. Symlinks are followed, so a link to a file counts
/// as a file and a link to a directory is descended into in recursive mode.
pub fn scan(opts: &ScanOptions<'_>) -> ScanResult {
    let walker = WalkBuilder::new(opts.root)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(if opts.recursive { None } else { Some(1) })
        .build();

    let mut result = ScanResult::default();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("Skipping entry due to error: {}", e);
                continue;
            }
        };

        if entry.depth() == 0 || !is_regular_file(&entry) {
            continue;
        }

        if !has_extension(entry.path(), opts.extension) {
            continue;
        }

        if opts.max_files.is_some_and(|max| result.files.len() >= max) {
            result.truncated = true;
            break;
        }

        log::debug!("Matched {}", entry.path().display());
        result.files.push(entry.into_path());
    }

    result
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}
