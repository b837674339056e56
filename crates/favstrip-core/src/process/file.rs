//! Read, filter and write back a single file.

use std::fs;
use std::path::Path;

use super::error::ProcessError;
use crate::strip::strip_marker_lines;

/// Successful rewrite of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Base name printed in the `Processed:` line.
    pub name: String,
    /// Lines dropped because they contained the marker.
    pub lines_removed: usize,
    /// Whether the bytes on disk changed.
    pub changed: bool,
}

/// Rewrite `path` in place without the lines containing `marker`.
///
/// The file is always written back, even when nothing changed, so a file
/// that can be read but not written still reports a failure.
pub fn process_file(path: &Path, marker: &str) -> Result<FileReport, ProcessError> {
    let bytes = fs::read(path).map_err(ProcessError::Read)?;
    let content = String::from_utf8(bytes).map_err(ProcessError::Decode)?;

    let stripped = strip_marker_lines(&content, marker);
    let changed = stripped.changed(&content);

    fs::write(path, stripped.content.as_bytes()).map_err(ProcessError::Write)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    tracing::debug!(path = %path.display(), removed = stripped.removed, changed, "processed");

    Ok(FileReport {
        name,
        lines_removed: stripped.removed,
        changed,
    })
}
