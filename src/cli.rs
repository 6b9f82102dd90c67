//! Command-line surface.
//!
//! Parsing is done by clap, but every clap failure (including `--help`) is
//! turned into [`RenameError::Usage`] so that the binary reports it on stderr
//! together with the full usage block and exits with a failure status.

use crate::error::{RenameError, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "file-renamer",
    about = "Change the extension of every matching file in a directory",
    after_help = "Examples:\n  file-renamer -p /home/user/documents -f cpp -t txt\n  file-renamer -p /home/user/documents -f cpp -t txt -r",
    disable_version_flag = true
)]
pub struct RenameArgs {
    /// Directory to scan
    #[arg(short, long, value_name = "DIR")]
    pub path: PathBuf,

    /// Extension to rename from (leading '.' optional)
    #[arg(short, long, value_name = "EXT", allow_hyphen_values = true)]
    pub from: String,

    /// Extension to rename to (leading '.' optional)
    #[arg(short, long, value_name = "EXT", allow_hyphen_values = true)]
    pub to: String,

    /// Skip the interactive confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Scan subdirectories as well
    #[arg(short, long)]
    pub recursive: bool,

    /// Show what would be renamed without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Stop collecting matches after this many files
    #[arg(long, value_name = "N")]
    pub max_files: Option<usize>,
}

/// Parses the process arguments.
pub fn parse() -> Result<RenameArgs> {
    parse_from(std::env::args_os())
}

/// Parses an explicit argument list (first item is the program name).
pub fn parse_from<I, T>(args: I) -> Result<RenameArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    RenameArgs::try_parse_from(args).map_err(usage_error)
}

/// Renders a clap error as the text shown to the user.
///
/// Help requests render as the help page alone; real errors get the error
/// line followed by the complete help page.
fn usage_error(err: clap::Error) -> RenameError {
    let rendered = err.render().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            RenameError::Usage(rendered.trim_end().to_string())
        }
        _ => {
            let help = RenameArgs::command().render_help().to_string();
            let message: Vec<&str> = rendered
                .lines()
                .take_while(|line| !line.starts_with("Usage:"))
                .collect();
            RenameError::Usage(format!(
                "{}\n\n{}",
                message.join("\n").trim_end(),
                help.trim_end()
            ))
        }
    }
}
