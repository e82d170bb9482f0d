//! Dedented source snippets cut out of a parsed fragment.

use std::ops::Range;

use tree_sitter::Node;

/// One line of a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLine {
    /// Line text with the common indentation removed.
    pub text: String,
    /// Line continues a multi-line template literal and must be emitted as is.
    pub verbatim: bool,
}

/// Source lines of a parsed fragment, ready to be re-indented at a new
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
    lines: Vec<SnippetLine>,
}

impl Snippet {
    /// Cut `region` out of `source` (extended back to the start of its first
    /// line) and strip the indentation its lines share.
    pub(crate) fn from_region(source: &str, root: Node<'_>, region: Range<usize>) -> Self {
        let line_start = source[..region.start].rfind('\n').map_or(0, |i| i + 1);
        let first_row = source[..line_start].matches('\n').count();
        let verbatim_rows = template_continuation_rows(root);

        let mut lines: Vec<SnippetLine> = source
            .get(line_start..region.end)
            .unwrap_or_default()
            .split('\n')
            .enumerate()
            .map(|(offset, text)| SnippetLine {
                text: text.to_string(),
                verbatim: verbatim_rows
                    .iter()
                    .any(|rows| rows.contains(&(first_row + offset))),
            })
            .collect();

        let common = lines
            .iter()
            .filter(|line| !line.verbatim && !line.text.trim().is_empty())
            .map(|line| indent_width(&line.text))
            .min()
            .unwrap_or(0);

        for line in lines.iter_mut().filter(|line| !line.verbatim) {
            if line.text.trim().is_empty() {
                line.text.clear();
            } else {
                line.text.replace_range(..common, "");
            }
        }

        Self { lines }
    }

    /// Whether the snippet holds no code at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.text.trim().is_empty())
    }

    /// Lines in order.
    #[must_use]
    pub fn lines(&self) -> &[SnippetLine] {
        &self.lines
    }

    /// The dedented text joined with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.indented("", true)
    }

    /// Join the lines, prefixing each non-blank line with `indent`.
    ///
    /// With `indent_first = false` the first line is left bare, for snippets
    /// spliced in mid-line. Template literal continuations never move.
    #[must_use]
    pub fn indented(&self, indent: &str, indent_first: bool) -> String {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if line.verbatim || line.text.is_empty() || (i == 0 && !indent_first) {
                    line.text.clone()
                } else {
                    format!("{indent}{}", line.text)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn indent_width(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Rows that continue a template literal opened on an earlier row.
fn template_continuation_rows(root: Node<'_>) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.kind() == "template_string" {
            let (start, end) = (node.start_position().row, node.end_position().row);
            if end > start {
                rows.push(start + 1..end + 1);
            }
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return rows;
            }
        }
    }
}
