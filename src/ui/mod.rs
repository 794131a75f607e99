//! # User Interface
//!
//! Colored terminal output and the interactive confirmation prompt.

pub mod log;
pub mod prompt;

pub use log::{debug, error, header, info, log, preview_line, separator, success, warn, Level, Log};
pub use prompt::confirm;
