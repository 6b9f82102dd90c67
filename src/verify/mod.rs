//! Validation and confirmation before any file is touched.

pub mod preflight;
pub mod prompt;
pub mod rules;

pub use preflight::validate_directory;
pub use prompt::{confirm, confirm_operation};
pub use rules::{has_extension, normalize_extension, renamed_path};
