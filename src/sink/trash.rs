//! Move to the platform trash

use std::path::Path;

use super::{Sink, SinkError};

pub struct TrashSink;

impl Sink for TrashSink {
    fn name(&self) -> &'static str {
        "trashed"
    }

    fn remove(&self, path: &Path) -> Result<(), SinkError> {
        ::trash::delete(path).map_err(|e| SinkError::Trash(e.to_string()))
    }
}
