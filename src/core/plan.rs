//! Removal plan - orphans with their on-disk sizes

use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub path: PathBuf,
    pub size: u64,
    /// False when metadata could not be read; `size` is then 0
    pub size_known: bool,
}

#[derive(Debug, Default)]
pub struct Plan {
    pub entries: Vec<PlanEntry>,
}

impl Plan {
    pub fn build(orphans: Vec<PathBuf>) -> Self {
        let entries = orphans
            .into_iter()
            .map(|path| match fs::metadata(&path) {
                Ok(meta) => PlanEntry { path, size: meta.len(), size_known: true },
                Err(e) => {
                    crate::ui::debug(&format!("No metadata for {}: {}", path.display(), e));
                    PlanEntry { path, size: 0, size_known: false }
                }
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}
