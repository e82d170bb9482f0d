//! Mutable document: a parsed tree plus pending byte-range patches.
//!
//! The tree itself is never rewritten. Transformations record patches
//! against the original source and the printer splices them in, so every
//! byte outside a patch is copied through untouched.

use std::ops::Range;

use omni_ast::{ParseError, SyntaxTree, parse_module};

/// Replace `range` of the original source with `text`. An empty range is an
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte range in the original source.
    pub range: Range<usize>,
    /// Replacement text.
    pub text: String,
}

/// Ordered, non-overlapping patches.
#[derive(Debug, Clone, Default)]
pub struct PatchSet {
    patches: Vec<Patch>,
}

impl PatchSet {
    /// Replace `range` with `text`.
    pub fn replace(&mut self, range: Range<usize>, text: impl Into<String>) {
        self.patches.push(Patch {
            range,
            text: text.into(),
        });
    }

    /// Insert `text` at `offset`.
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        self.replace(offset..offset, text);
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Number of recorded patches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Splice all patches into `source`.
    ///
    /// Patches apply in source order; insertions at the same offset keep
    /// the order they were recorded in. A patch overlapping an earlier one
    /// is dropped.
    #[must_use]
    pub fn apply(&self, source: &str) -> String {
        self.apply_with_line_ending(source, "\n")
    }

    /// Like [`PatchSet::apply`], but every line break in patch text is
    /// written as `line_ending`. Source bytes outside patches are untouched.
    #[must_use]
    pub fn apply_with_line_ending(&self, source: &str, line_ending: &str) -> String {
        let mut ordered: Vec<&Patch> = self.patches.iter().collect();
        ordered.sort_by_key(|patch| patch.range.start);

        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;
        for patch in ordered {
            if patch.range.start < cursor || patch.range.end > source.len() {
                tracing::warn!(
                    start = patch.range.start,
                    end = patch.range.end,
                    "dropping overlapping patch"
                );
                continue;
            }
            out.push_str(&source[cursor..patch.range.start]);
            if line_ending == "\n" {
                out.push_str(&patch.text);
            } else {
                out.push_str(&patch.text.replace("\r\n", "\n").replace('\n', line_ending));
            }
            cursor = patch.range.end;
        }
        out.push_str(&source[cursor..]);
        out
    }
}

/// A parsed source file and the edits pending against it.
#[derive(Debug)]
pub struct Document {
    /// Parsed original content.
    pub tree: SyntaxTree,
    /// Pending edits.
    pub patches: PatchSet,
}

impl Document {
    /// Parse `content` into a fresh, unmodified document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the content is not valid TSX.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        Ok(Self {
            tree: parse_module(content)?,
            patches: PatchSet::default(),
        })
    }

    /// Original source text.
    #[must_use]
    pub fn source(&self) -> &str {
        self.tree.source()
    }

    /// Whether any edit has been recorded.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        !self.patches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_in_source_order() {
        let mut patches = PatchSet::default();
        patches.replace(6..11, "there");
        patches.insert(0, ">> ");
        patches.insert(11, "!");
        assert_eq!(patches.apply("hello world"), ">> hello there!");
    }

    #[test]
    fn test_same_offset_inserts_keep_order() {
        let mut patches = PatchSet::default();
        patches.insert(1, "a");
        patches.insert(1, "b");
        assert_eq!(patches.apply("xy"), "xaby");
    }

    #[test]
    fn test_patch_text_follows_line_ending() {
        let mut patches = PatchSet::default();
        patches.insert(3, "x\ny\r\n");
        assert_eq!(
            patches.apply_with_line_ending("a\r\nb\r\n", "\r\n"),
            "a\r\nx\r\ny\r\nb\r\n"
        );
    }

    #[test]
    fn test_overlap_is_dropped() {
        let mut patches = PatchSet::default();
        patches.replace(0..4, "AAAA");
        patches.replace(2..6, "BBBB");
        assert_eq!(patches.apply("012345"), "AAAA45");
    }

    #[test]
    fn test_unmodified_document() {
        let doc = Document::parse("const a = 1;\n").expect("parse");
        assert!(!doc.is_modified());
        assert_eq!(doc.patches.apply(doc.source()), "const a = 1;\n");
    }
}
