// src/diff.rs
// =============================================================================
// Change detection between the previous and current content of a file.
//
// Diffing is line based (`similar`, Myers algorithm). Every inserted and
// removed line is reported; nothing is summarized or truncated, so a large
// change produces a large report.
//
// Rendered reports use a two-character prefix per line:
//   "  " unchanged
//   "- " removed
//   "+ " added
// =============================================================================

use std::fmt;

use similar::{ChangeTag, TextDiff};

use crate::types::SnapshotKey;

/// One line of a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Unchanged(String),
    Added(String),
    Removed(String),
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffLine::Unchanged(line) => write!(f, "  {}", line),
            DiffLine::Added(line) => write!(f, "+ {}", line),
            DiffLine::Removed(line) => write!(f, "- {}", line),
        }
    }
}

/// How a file changed between two observations.
#[derive(Debug, Clone)]
pub struct ChangeReport {
    pub key: SnapshotKey,
    pub lines: Vec<DiffLine>,
}

impl ChangeReport {
    pub fn added(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    pub fn removed(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }

    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(DiffLine::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compares `old` against `new`.
///
/// Returns `None` on first observation (`old` is `None`) and when the two
/// are byte-for-byte identical. The caller stores `new` either way.
pub fn detect(key: &SnapshotKey, old: Option<&str>, new: &str) -> Option<ChangeReport> {
    let old = old?;
    if old == new {
        return None;
    }

    let diff = TextDiff::from_lines(old, new);
    let lines = diff
        .iter_all_changes()
        .map(|change| {
            // Keep the line text without its terminator; render() re-joins.
            let text = change
                .value()
                .trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string();
            match change.tag() {
                ChangeTag::Equal => DiffLine::Unchanged(text),
                ChangeTag::Insert => DiffLine::Added(text),
                ChangeTag::Delete => DiffLine::Removed(text),
            }
        })
        .collect();

    Some(ChangeReport {
        key: key.clone(),
        lines,
    })
}
