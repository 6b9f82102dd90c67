//! Rename operations.

mod rename;

pub use rename::{RenameOutcome, RenameReport, rename_all};
