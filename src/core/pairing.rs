//! Basename pairing between JPEG and RAW files

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// How file stems are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Exact,
    IgnoreCase,
}

/// Comparison key derived from a file stem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StemKey(OsString);

impl StemKey {
    /// `None` for paths without a file name.
    ///
    /// With `IgnoreCase`, a stem that is not valid UTF-8 is kept as-is and
    /// therefore still compared exactly.
    pub fn from_path(path: &Path, mode: MatchMode) -> Option<Self> {
        let stem = path.file_stem()?;
        let key = match (mode, stem.to_str()) {
            (MatchMode::IgnoreCase, Some(s)) => OsString::from(s.to_lowercase()),
            _ => stem.to_os_string(),
        };
        Some(Self(key))
    }
}

pub fn stem_set(files: &[PathBuf], mode: MatchMode) -> HashSet<StemKey> {
    files
        .iter()
        .filter_map(|f| StemKey::from_path(f, mode))
        .collect()
}

/// Result of pairing RAW files against JPEG files
#[derive(Debug)]
pub struct Pairing {
    pub jpg_count: usize,
    pub raw_count: usize,
    pub orphans: Vec<PathBuf>,
}

impl Pairing {
    pub fn new(jpg_files: &[PathBuf], raw_files: &[PathBuf], mode: MatchMode) -> Self {
        Self {
            jpg_count: jpg_files.len(),
            raw_count: raw_files.len(),
            orphans: find_orphans(raw_files, jpg_files, mode),
        }
    }

    pub fn matched(&self) -> usize {
        self.raw_count - self.orphans.len()
    }
}

/// RAW files whose stem has no JPEG counterpart, in input order.
///
/// A RAW path without a file stem is never reported.
pub fn find_orphans(raw_files: &[PathBuf], jpg_files: &[PathBuf], mode: MatchMode) -> Vec<PathBuf> {
    let jpg_stems = stem_set(jpg_files, mode);

    raw_files
        .iter()
        .filter(|raw| match StemKey::from_path(raw, mode) {
            Some(key) => !jpg_stems.contains(&key),
            None => false,
        })
        .cloned()
        .collect()
}
