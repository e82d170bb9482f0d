//! Tests for diff module - edit ranges, preview and unified diff.

use omni_edit::{
    ChunkTag, EditRange, TRUNCATION_MARKER, change_report, edit_ranges, generate_unified_diff,
    line_chunks, render_preview,
};

#[test]
fn test_simple_diff() {
    let old = "line1\nline2\nline3\n";
    let new = "line1\nmodified\nline3\n";

    let diff = generate_unified_diff(old, new);

    assert!(diff.contains("-line2"));
    assert!(diff.contains("+modified"));
}

#[test]
fn test_addition_only() {
    let diff = generate_unified_diff("", "new line\n");
    assert!(diff.contains("+new line"));
}

#[test]
fn test_single_line_change_coalesces() {
    let report = change_report("a\nb\nc", "a\nX\nc", 400);
    assert_eq!(report.edits, vec![EditRange { start: 1, end: 1 }]);

    let removed = report.preview.lines().filter(|l| l.starts_with('-')).count();
    let added = report.preview.lines().filter(|l| l.starts_with('+')).count();
    assert_eq!((removed, added), (1, 1));
}

#[test]
fn test_replace_becomes_removed_then_added() {
    let chunks = line_chunks("a\nb\nc", "a\nX\nc");
    let tags: Vec<_> = chunks.iter().map(|c| c.tag).collect();
    assert_eq!(
        tags,
        vec![
            ChunkTag::Context,
            ChunkTag::Removed,
            ChunkTag::Added,
            ChunkTag::Context
        ]
    );
    assert_eq!(chunks[1].lines, vec!["b"]);
}

#[test]
fn test_separate_runs() {
    let old = "a\nb\nc\nd\ne\n";
    let new = "a\nB\nc\nd\ne\nf\n";
    let chunks = line_chunks(old, new);
    assert_eq!(
        edit_ranges(&chunks),
        vec![EditRange { start: 1, end: 1 }, EditRange { start: 4, end: 3 }]
    );
}

#[test]
fn test_pure_removal() {
    let report = change_report("a\nb\nc\n", "a\nc\n", 400);
    assert_eq!(report.edits, vec![EditRange { start: 1, end: 0 }]);
    assert_eq!(report.preview, " a\n-b\n c");
}

#[test]
fn test_preview_truncation() {
    let old: String = (0..10).map(|i| format!("{i}\n")).collect();
    let new: String = (0..10).map(|i| format!("x{i}\n")).collect();
    let chunks = line_chunks(&old, &new);

    let preview = render_preview(&chunks, 5);
    let lines: Vec<_> = preview.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5], TRUNCATION_MARKER);

    // Edits still cover the whole change.
    assert_eq!(edit_ranges(&chunks), vec![EditRange { start: 0, end: 0 }]);
}

#[test]
fn test_preview_fits_exactly() {
    let report = change_report("a\n", "b\n", 2);
    assert_eq!(report.preview, "-a\n+b");
}
