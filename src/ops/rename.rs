//! Extension renaming for a list of matched files.
//!
//! Each file is renamed independently with `std::fs::rename`. A failure is
//! recorded and reported, and the batch moves on to the next file; nothing
//! is rolled back.

use crate::verify::renamed_path;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to a single file.
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed {
        from: PathBuf,
        to: PathBuf,
    },
    Failed {
        from: PathBuf,
        to: PathBuf,
        error: io::Error,
    },
    /// Dry run; nothing was touched.
    Planned {
        from: PathBuf,
        to: PathBuf,
    },
}

impl RenameOutcome {
    pub fn old_path(&self) -> &Path {
        match self {
            RenameOutcome::Renamed { from, .. }
            | RenameOutcome::Failed { from, .. }
            | RenameOutcome::Planned { from, .. } => from,
        }
    }

    pub fn new_path(&self) -> &Path {
        match self {
            RenameOutcome::Renamed { to, .. }
            | RenameOutcome::Failed { to, .. }
            | RenameOutcome::Planned { to, .. } => to,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RenameOutcome::Failed { .. })
    }
}

/// Outcomes of one batch, in the order the files were processed.
#[derive(Debug, Default)]
pub struct RenameReport {
    outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn outcomes(&self) -> &[RenameOutcome] {
        &self.outcomes
    }

    pub fn renamed_count(&self) -> usize {
        self.count(RenameOutcome::is_renamed)
    }

    pub fn failed_count(&self) -> usize {
        self.count(RenameOutcome::is_failed)
    }

    /// Outcomes that did not go through, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &RenameOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    pub fn planned_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Planned { .. }))
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Renames every file in `files` to use `to_extension`, in list order.
///
/// Prints `Renaming: <old> -> <new>` for each success and a failure notice on
/// stderr for each error. With `dry_run` set, prints `Would rename: ...` and
/// leaves the file system alone.
pub fn rename_all(files: &[PathBuf], to_extension: &str, dry_run: bool) -> RenameReport {
    let mut report = RenameReport::default();

    for from in files {
        let to = renamed_path(from, to_extension);

        if dry_run {
            println!("Would rename: {} -> {}", from.display(), to.display());
            report.outcomes.push(RenameOutcome::Planned {
                from: from.clone(),
                to,
            });
            continue;
        }

        log::debug!("Renaming {} to {}", from.display(), to.display());
        let outcome = rename_one(from, to);
        match &outcome {
            RenameOutcome::Renamed { from, to } => {
                println!("Renaming: {} -> {}", from.display(), to.display());
            }
            RenameOutcome::Failed { from, error, .. } => {
                log::warn!("Rename of {} failed: {}", from.display(), error);
                eprintln!(
                    "  {} Failed to rename file '{}': {}",
                    "->".red(),
                    from.display(),
                    error
                );
            }
            RenameOutcome::Planned { .. } => {}
        }
        report.outcomes.push(outcome);
    }

    report
}

fn rename_one(from: &Path, to: PathBuf) -> RenameOutcome {
    match fs::rename(from, &to) {
        Ok(()) => RenameOutcome::Renamed {
            from: from.to_path_buf(),
            to,
        },
        Err(error) => RenameOutcome::Failed {
            from: from.to_path_buf(),
            to,
            error,
        },
    }
}
