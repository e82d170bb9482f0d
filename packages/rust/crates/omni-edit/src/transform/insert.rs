//! Statement insertion: after the last import, or at the very top.

use omni_ast::{SyntaxNode, SyntaxTree, parse_statements};

use super::{Anchor, insert_statement_text};
use crate::document::PatchSet;
use crate::error::EditError;

fn insert(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    anchor: Anchor<'_>,
    text: &str,
) -> Result<bool, EditError> {
    let snippet = parse_statements(text).map_err(EditError::fragment("insertText"))?;
    if snippet.is_empty() {
        tracing::debug!("insertText holds no statements");
        return Ok(true);
    }
    insert_statement_text(tree, patches, anchor, &snippet.to_text());
    Ok(true)
}

/// Insert after the last import anywhere in the top-level statement list,
/// or at the top when there is none.
pub(crate) fn insert_after_last_import(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    text: &str,
) -> Result<bool, EditError> {
    let anchor = tree
        .statements()
        .into_iter()
        .rev()
        .find(|stmt| matches!(stmt, SyntaxNode::ImportDeclaration(_)))
        .map_or(Anchor::Top, |import| Anchor::After(import.node()));
    insert(tree, patches, anchor, text)
}

/// Insert ahead of everything, imports included.
pub(crate) fn insert_at_top(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    text: &str,
) -> Result<bool, EditError> {
    insert(tree, patches, Anchor::Top, text)
}
