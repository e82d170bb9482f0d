//! Transformation routines, one per edit action.
//!
//! Each routine inspects the original tree and records byte-range patches.
//! Nothing is rewritten until the printer runs, so a routine that fails
//! halfway leaves no visible mutation behind.

mod function;
mod import;
mod insert;
mod jsx;

pub(crate) use function::update_function_body;
pub(crate) use import::upsert_import;
pub(crate) use insert::{insert_after_last_import, insert_at_top};
pub(crate) use jsx::{replace_jsx_attributes, replace_jsx_element};

use omni_ast::{Node, SyntaxTree};

use crate::document::PatchSet;

/// Where new top-level statements go.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Anchor<'t> {
    /// On a new line after this top-level statement.
    After(Node<'t>),
    /// Before the first top-level node (hashbang excepted).
    Top,
}

/// Record an insertion of `text` as top-level statements at `anchor`.
///
/// After a statement, the text starts on a fresh line past any comment
/// sharing the statement's last line. At the top it gets its own line
/// ahead of the first node.
pub(crate) fn insert_statement_text(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    anchor: Anchor<'_>,
    text: &str,
) {
    let source = tree.source();
    match anchor {
        Anchor::After(node) => {
            let row = node.end_position().row;
            let offset = tree
                .top_level_nodes()
                .into_iter()
                .filter(|next| next.start_byte() >= node.end_byte())
                .take_while(|next| next.kind() == "comment" && next.start_position().row == row)
                .last()
                .map_or(node.end_byte(), |comment| comment.end_byte());
            patches.insert(offset, format!("\n{text}"));
        }
        Anchor::Top => {
            let first = tree
                .top_level_nodes()
                .into_iter()
                .find(|node| node.kind() != "hash_bang_line");
            match first {
                Some(node) => {
                    let offset = line_start(source, node.start_byte());
                    patches.insert(offset, format!("{text}\n"));
                }
                None => match tree
                    .top_level_nodes()
                    .into_iter()
                    .find(|node| node.kind() == "hash_bang_line")
                {
                    Some(hashbang) => patches.insert(hashbang.end_byte(), format!("\n{text}")),
                    None if source.is_empty() => patches.insert(0, text),
                    None => patches.insert(0, format!("{text}\n")),
                },
            }
        }
    }
}

fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(source: &str, text: &str, after_first: bool) -> String {
        let tree = omni_ast::parse_module(source).expect("parse");
        let mut patches = PatchSet::default();
        let anchor = if after_first {
            Anchor::After(tree.statements()[0].node())
        } else {
            Anchor::Top
        };
        insert_statement_text(&tree, &mut patches, anchor, text);
        patches.apply(source)
    }

    #[test]
    fn test_after_skips_trailing_comment() {
        assert_eq!(
            insert("import a from 'a'; // keep\nf();\n", "g();", true),
            "import a from 'a'; // keep\ng();\nf();\n"
        );
    }

    #[test]
    fn test_top_goes_before_leading_comment() {
        assert_eq!(
            insert("// header\nf();\n", "g();", false),
            "g();\n// header\nf();\n"
        );
    }

    #[test]
    fn test_top_respects_hashbang() {
        assert_eq!(
            insert("#!/usr/bin/env node\nf();\n", "g();", false),
            "#!/usr/bin/env node\ng();\nf();\n"
        );
        assert_eq!(
            insert("#!/usr/bin/env node", "g();", false),
            "#!/usr/bin/env node\ng();"
        );
    }

    #[test]
    fn test_top_of_empty_source() {
        assert_eq!(insert("", "g();", false), "g();");
        assert_eq!(insert("\n", "g();", false), "g();\n\n");
    }
}
