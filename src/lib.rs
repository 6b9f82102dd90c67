#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod fs;
pub mod ops;
pub mod report;
pub mod verify;

pub use error::*;

pub fn run() -> Result<command::RunStatus> {
    let args = cli::parse()?;
    let config = config::Config::from_args(args)?;
    command::execute(&config)
}
