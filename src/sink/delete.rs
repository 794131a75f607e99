//! Permanent deletion

use std::fs;
use std::path::Path;

use super::{Sink, SinkError};

pub struct DeleteSink;

impl Sink for DeleteSink {
    fn name(&self) -> &'static str {
        "deleted"
    }

    fn remove(&self, path: &Path) -> Result<(), SinkError> {
        fs::remove_file(path)?;
        Ok(())
    }
}
