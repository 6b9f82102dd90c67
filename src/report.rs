//! Progress and summary output.
//!
//! Messages meant for scripts and users go to stdout; notices about things
//! that went wrong go to stderr.

use crate::config::Config;
use crate::ops::RenameReport;
use colored::Colorize;
use std::path::PathBuf;

pub const SEPARATOR: &str = "---";

pub fn print_scanning(config: &Config) {
    if config.recursive {
        println!(
            "Scanning directory: {} (recursive)",
            config.directory.display()
        );
    } else {
        println!("Scanning directory: {}", config.directory.display());
    }
}

pub fn print_no_matches(config: &Config) {
    println!(
        "No files with extension '.{}' found to rename.",
        config.from_extension
    );
}

pub fn print_truncated(limit: usize) {
    eprintln!(
        "{} Maximum file limit ({}) reached; remaining files were not collected.",
        "Warning:".yellow().bold(),
        limit
    );
}

/// Prints the match list and the planned extension change.
pub fn print_plan(config: &Config, files: &[PathBuf]) {
    println!("file found:");
    for file in files {
        println!("  {}", file.display());
    }
    println!(
        "Will change extensions from '.{}' to '.{}'",
        config.from_extension, config.to_extension
    );
}

pub fn print_cancelled() {
    println!("{}", "Operation cancelled.".yellow());
}

/// Prints the closing summary for a finished batch.
pub fn print_summary(report: &RenameReport, dry_run: bool) {
    if dry_run {
        println!("{}", dry_run_message(report.planned_count()));
        return;
    }

    let renamed = report.renamed_count();
    if renamed == 0 {
        println!("{}", summary_message(renamed));
    } else {
        println!("{}", summary_message(renamed).green());
    }

    let failed = report.failed_count();
    if failed > 0 {
        eprintln!(
            "{} {} could not be renamed:",
            failed,
            if failed == 1 { "file" } else { "files" }
        );
        for outcome in report.failures() {
            eprintln!(
                "  {} -> {}",
                outcome.old_path().display(),
                outcome.new_path().display()
            );
        }
    }
}

/// Summary line for `renamed` successful renames.
pub fn summary_message(renamed: usize) -> String {
    match renamed {
        0 => "No files were renamed.".to_string(),
        1 => "Done. Successfully renamed 1 file.".to_string(),
        n => format!("Done. Successfully renamed {} files.", n),
    }
}

fn dry_run_message(planned: usize) -> String {
    format!(
        "Dry run: {} {} would be renamed.",
        planned,
        if planned == 1 { "file" } else { "files" }
    )
}
