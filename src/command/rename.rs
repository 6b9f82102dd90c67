use crate::config::Config;
use crate::error::Result;
use crate::fs::{ScanOptions, scan};
use crate::ops::rename_all;
use crate::report;
use crate::verify::confirm_operation;

/// How a run ended. All of these exit successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing matched; no prompt was shown.
    NoMatches,
    /// The user declined at the prompt.
    Cancelled,
    /// The batch ran; counts are per-file successes and failures.
    Completed { renamed: usize, failed: usize },
}

pub fn execute(config: &Config) -> Result<RunStatus> {
    report::print_scanning(config);

    let scanned = scan(&ScanOptions {
        root: &config.directory,
        extension: &config.from_extension,
        recursive: config.recursive,
        max_files: config.max_files,
    });

    if scanned.truncated
        && let Some(limit) = config.max_files
    {
        log::warn!("Match list truncated at {} files", limit);
        report::print_truncated(limit);
    }

    if scanned.files.is_empty() {
        report::print_no_matches(config);
        return Ok(RunStatus::NoMatches);
    }

    report::print_plan(config, &scanned.files);

    if !confirm_operation(config)? {
        report::print_cancelled();
        return Ok(RunStatus::Cancelled);
    }

    println!("{}", report::SEPARATOR);
    let outcome = rename_all(&scanned.files, &config.to_extension, config.dry_run);
    println!("{}", report::SEPARATOR);

    report::print_summary(&outcome, config.dry_run);

    Ok(RunStatus::Completed {
        renamed: outcome.renamed_count(),
        failed: outcome.failed_count(),
    })
}
