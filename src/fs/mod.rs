//! File system traversal.

pub mod scan;

pub use scan::{ScanOptions, ScanResult, scan};
