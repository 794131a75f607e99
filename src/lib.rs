//! # rawprune
//!
//! Pairs camera RAW files with their developed JPEGs by basename and removes
//! (or trashes) the RAW files whose JPEG no longer exists.
//!
//! ```text
//! scan     glob patterns  ->  file lists
//! core     file lists     ->  orphaned RAW files + sizes
//! sink     orphan         ->  deleted / trashed
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod scan;
pub mod sink;
pub mod ui;
