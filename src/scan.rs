//! Pattern expansion - turns glob patterns into file lists

use glob::{glob_with, MatchOptions};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use crate::ui;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Wildcards never match a leading dot, so hidden files such as macOS
/// `._IMG_0001.CR2` resource forks stay out unless named explicitly.
fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    }
}

/// Expands every pattern and returns the matching regular files, sorted and
/// de-duplicated. Directories matched by a pattern are skipped.
pub fn expand(patterns: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let paths = glob_with(pattern, match_options()).map_err(|source| ScanError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    ui::debug(&format!("Unreadable: {}", e));
                    continue;
                }
            };

            if !path.is_file() {
                ui::debug(&format!("Skipped (not a file): {}", path.display()));
                continue;
            }

            let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
            if seen.insert(canonical) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
