//! Diff generation utilities.
//!
//! Line-granularity diffs via the `similar` crate: coalesced edit ranges and
//! a capped preview for change reports, plus a compact unified diff for
//! human-readable summaries.

use similar::{ChangeTag, TextDiff};

use crate::types::EditRange;

/// Marker appended when the preview hits its line cap.
pub const TRUNCATION_MARKER: &str = "... (diff truncated)";

/// Kind of a diff chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    /// Lines present in both texts.
    Context,
    /// Lines only in the new text.
    Added,
    /// Lines only in the original text.
    Removed,
}

impl ChunkTag {
    fn prefix(self) -> &'static str {
        match self {
            Self::Context => " ",
            Self::Added => "+",
            Self::Removed => "-",
        }
    }
}

/// A maximal run of lines sharing one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChunk {
    /// Chunk kind.
    pub tag: ChunkTag,
    /// Lines without their terminating newline.
    pub lines: Vec<String>,
}

/// Edit ranges and preview for one original/new pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    /// Coalesced edit ranges.
    pub edits: Vec<EditRange>,
    /// Prefixed, capped preview.
    pub preview: String,
}

/// Split the line diff of `original` → `modified` into chunks. A replaced
/// block becomes a removed chunk followed by an added chunk.
#[must_use]
pub fn line_chunks(original: &str, modified: &str) -> Vec<DiffChunk> {
    let diff = TextDiff::from_lines(original, modified);
    let mut chunks: Vec<DiffChunk> = Vec::new();

    for change in diff.iter_all_changes() {
        let tag = match change.tag() {
            ChangeTag::Equal => ChunkTag::Context,
            ChangeTag::Insert => ChunkTag::Added,
            ChangeTag::Delete => ChunkTag::Removed,
        };
        let value = change.value();
        let line = value.strip_suffix('\n').unwrap_or(value);
        let line = line.strip_suffix('\r').unwrap_or(line).to_string();

        match chunks.last_mut() {
            Some(chunk) if chunk.tag == tag => chunk.lines.push(line),
            _ => chunks.push(DiffChunk {
                tag,
                lines: vec![line],
            }),
        }
    }

    chunks
}

/// Coalesce consecutive added/removed chunks into edit ranges.
///
/// The counter only advances over context chunks. A run mixing removals and
/// additions ends at the counter; a run of only one kind ends one before it.
#[must_use]
pub fn edit_ranges(chunks: &[DiffChunk]) -> Vec<EditRange> {
    struct Run {
        start: i64,
        added: bool,
        removed: bool,
    }

    fn close(run: &Run, counter: i64) -> EditRange {
        let end = if run.added && run.removed {
            counter
        } else {
            counter - 1
        };
        EditRange {
            start: run.start,
            end,
        }
    }

    let mut counter: i64 = 0;
    let mut ranges = Vec::new();
    let mut run: Option<Run> = None;

    for chunk in chunks {
        match chunk.tag {
            ChunkTag::Context => {
                if let Some(open) = run.take() {
                    ranges.push(close(&open, counter));
                }
                counter += i64::try_from(chunk.lines.len()).unwrap_or(i64::MAX);
            }
            ChunkTag::Added | ChunkTag::Removed => {
                let open = run.get_or_insert(Run {
                    start: counter,
                    added: false,
                    removed: false,
                });
                open.added |= chunk.tag == ChunkTag::Added;
                open.removed |= chunk.tag == ChunkTag::Removed;
            }
        }
    }
    if let Some(open) = run {
        ranges.push(close(&open, counter));
    }

    ranges
}

/// Render every chunk line with its `+`/`-`/space prefix, stopping at
/// `max_lines` and appending [`TRUNCATION_MARKER`] if anything was left out.
#[must_use]
pub fn render_preview(chunks: &[DiffChunk], max_lines: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    'chunks: for chunk in chunks {
        let prefix = chunk.tag.prefix();
        for line in &chunk.lines {
            if lines.len() >= max_lines {
                lines.push(TRUNCATION_MARKER.to_string());
                break 'chunks;
            }
            lines.push(format!("{prefix}{line}"));
        }
    }

    lines.join("\n")
}

/// Edit ranges and preview in one pass over the chunks.
#[must_use]
pub fn change_report(original: &str, modified: &str, max_preview_lines: usize) -> ChangeReport {
    let chunks = line_chunks(original, modified);
    ChangeReport {
        edits: edit_ranges(&chunks),
        preview: render_preview(&chunks, max_preview_lines),
    }
}

/// Generate a unified diff between two strings.
///
/// Uses the `similar` crate for line-by-line diffing with context.
///
/// # Arguments
/// * `original` - The original content
/// * `modified` - The modified content
///
/// # Returns
/// A string containing the unified diff with `+`, `-`, and ` ` prefixes.
#[must_use]
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut output = String::new();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            output.push_str("...\n");
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                output.push_str(sign);
                output.push_str(change.value());
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }
    }

    output
}
