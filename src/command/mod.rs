pub mod rename;

pub use rename::{RunStatus, execute};
