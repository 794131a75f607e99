//! # Command Implementations

pub mod prune;

pub use prune::{PruneOptions, Report, RunMode};
