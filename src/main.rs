//! Binary entry point for `file-renamer`.

use colored::Colorize;
use file_renamer::command::RunStatus;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match file_renamer::run() {
        Ok(RunStatus::Completed { renamed, failed }) if failed > 0 => {
            log::warn!("Finished with {} renamed and {} failed", renamed, failed);
        }
        Ok(status) => log::debug!("Finished: {:?}", status),
        Err(e) if e.is_usage() => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
