//! Candidate file discovery: glob a file-name pattern inside one directory.

use glob::MatchOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Full glob expression for `pattern` inside `dir`. The directory part is
/// escaped so `[`, `*` and `?` in its name match literally.
pub fn glob_expression(dir: &Path, pattern: &str) -> String {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let dir_part = escaped_dir.trim_end_matches('/');
    format!("{}/{}", dir_part, pattern)
}

/// Paths matching `pattern` directly inside `dir`, in glob enumeration order.
///
/// Wildcards never match a leading `.`, so hidden files are skipped unless the
/// pattern names the dot itself. A missing directory yields no candidates. Entries the walker cannot read
/// are logged and skipped; only a malformed pattern is an error.
pub fn candidate_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let expr = glob_expression(dir, pattern);
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob::glob_with(&expr, options).map_err(|source| DiscoverError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => {
                tracing::warn!(path = %e.path().display(), "skipping unreadable glob entry: {}", e.error());
            }
        }
    }
    tracing::debug!(glob = %expr, count = files.len(), "discovered candidate files");
    Ok(files)
}
