//! Resolved run configuration.

use crate::cli::RenameArgs;
use crate::error::Result;
use crate::verify::{normalize_extension, validate_directory};
use std::path::PathBuf;

/// Everything a run needs, validated and with extensions normalized.
///
/// Built once from the command line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to scan.
    pub directory: PathBuf,
    /// Extension to match, without leading dot.
    pub from_extension: String,
    /// Replacement extension, without leading dot.
    pub to_extension: String,
    pub skip_confirmation: bool,
    pub recursive: bool,
    pub dry_run: bool,
    /// Cap on the number of matches; `None` means unlimited.
    pub max_files: Option<usize>,
}

impl Config {
    /// Normalizes and validates parsed arguments.
    ///
    /// # Errors
    ///
    /// - `InvalidExtension` if either extension is empty after stripping its dot
    /// - `InvalidPath` if the directory does not exist or is not a directory
    pub fn from_args(args: RenameArgs) -> Result<Self> {
        let from_extension = normalize_extension(&args.from)?;
        let to_extension = normalize_extension(&args.to)?;
        validate_directory(&args.path)?;

        let config = Self {
            directory: args.path,
            from_extension,
            to_extension,
            skip_confirmation: args.yes,
            recursive: args.recursive,
            dry_run: args.dry_run,
            max_files: args.max_files,
        };
        log::debug!("Resolved configuration: {:?}", config);

        Ok(config)
    }
}
