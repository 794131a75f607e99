//! Removal backends.
//!
//! The [`Sink`] trait is the single operation every backend supports:
//! take one file out of the collection. The workflow in
//! [`commands::prune`](crate::commands::prune) never touches the filesystem
//! directly, so permanent deletion and move-to-trash are interchangeable.
//!
//! | Kind | Backend | Reversible |
//! |---|---|---|
//! | `delete` | [`DeleteSink`] (`std::fs::remove_file`) | no |
//! | `trash` | [`TrashSink`] (`trash` crate) | yes |

pub mod delete;
pub mod trash;

use clap::ValueEnum;
use std::path::Path;
use thiserror::Error;

pub use delete::DeleteSink;
pub use self::trash::TrashSink;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Trash failed: {0}")]
    Trash(String),
}

pub trait Sink {
    /// Short verb shown in logs ("deleted", "trashed")
    fn name(&self) -> &'static str;

    fn remove(&self, path: &Path) -> Result<(), SinkError>;
}

/// Selects a removal backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// Remove files permanently
    #[default]
    Delete,
    /// Move files to the system trash
    Trash,
}

impl SinkKind {
    pub fn build(self) -> Box<dyn Sink> {
        match self {
            SinkKind::Delete => Box::new(DeleteSink),
            SinkKind::Trash => Box::new(TrashSink),
        }
    }
}
