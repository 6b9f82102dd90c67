//! User confirmation prompt for rename operations.
//!
//! Skipped entirely when `--yes` or `--dry-run` is given; otherwise exactly
//! one line is read.

use crate::config::Config;
use crate::error::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Do you want to proceed with renaming? (y/N): ";

/// Asks for confirmation on the process's stdin/stdout.
///
/// Returns `Ok(true)` without reading anything when the prompt is skipped.
pub fn confirm_operation(config: &Config) -> Result<bool> {
    if config.skip_confirmation || config.dry_run {
        return Ok(true);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm(&mut stdin.lock(), &mut stdout.lock())
}

/// Writes the prompt to `output` and reads one answer line from `input`.
///
/// Only a lone `y` or `Y` confirms. An empty line, any other text, and end
/// of input all decline.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{}", PROMPT).context("failed to write confirmation prompt")?;
    output.flush().context("failed to flush confirmation prompt")?;

    let mut response = String::new();
    let read = input
        .read_line(&mut response)
        .context("failed to read confirmation")?;

    if read == 0 {
        log::info!("Input closed before an answer was given");
        return Ok(false);
    }

    let confirmed = is_confirmation(&response);
    if !confirmed {
        log::info!("Rename cancelled by user");
    }

    Ok(confirmed)
}

fn is_confirmation(line: &str) -> bool {
    let answer = line.strip_suffix('\n').unwrap_or(line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    answer == "y" || answer == "Y"
}
