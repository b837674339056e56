//! Line filter: drop every line containing a marker substring.
//!
//! Line endings are normalized first: `\r\n` and a lone `\r` both become
//! `\n`. Kept lines are rejoined with `\n` and the result never ends with a
//! newline, so a second pass over the output is a no-op.

use std::borrow::Cow;

/// Result of filtering one text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub content: String,
    /// Number of lines that contained the marker.
    pub removed: usize,
}

impl Stripped {
    /// True when the filtered content differs from `original`.
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Rewrite `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Remove lines containing `marker`, keeping the rest in order.
pub fn strip_marker_lines(content: &str, marker: &str) -> Stripped {
    let normalized = normalize_newlines(content);
    let mut removed = 0;
    let kept: Vec<&str> = normalized
        .split('\n')
        .filter(|line| {
            let hit = line.contains(marker);
            if hit {
                removed += 1;
            }
            !hit
        })
        .collect();

    let joined = kept.join("\n");
    let content = joined.trim_end_matches('\n').to_string();
    Stripped { content, removed }
}
