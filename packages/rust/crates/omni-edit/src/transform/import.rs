//! `upsertImport`: merge named specifiers into an import or create it.

use std::cmp::Ordering;

use omni_ast::{ImportDeclaration, SyntaxNode, SyntaxTree};

use super::{Anchor, insert_statement_text};
use crate::document::PatchSet;
use crate::printer::{ListLayout, Printer, line_indent};

/// Specifier order: case-insensitive, ties broken by byte order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Requested names with duplicates removed, in request order.
fn unique_names(specifiers: &[String]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::with_capacity(specifiers.len());
    for name in specifiers {
        if !names.contains(&name.as_str()) {
            names.push(name);
        }
    }
    names
}

/// Merge `specifiers` into the first import of `module`, or create a new
/// import after the leading imports. Returns whether anything was added.
pub(crate) fn upsert_import(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    printer: &Printer,
    module: &str,
    specifiers: &[String],
) -> bool {
    let statements = tree.statements();
    let existing = statements.iter().find_map(|stmt| match stmt {
        SyntaxNode::ImportDeclaration(import) if import.source_value() == Some(module) => {
            Some(*import)
        }
        _ => None,
    });

    match existing {
        Some(import) => merge_into(tree, patches, printer, import, specifiers),
        None => {
            let mut names = unique_names(specifiers);
            names.sort_by(|a, b| compare_names(a, b));
            let names: Vec<String> = names.into_iter().map(str::to_string).collect();
            let text = printer.import_declaration(module, &names);

            let last_leading = statements
                .iter()
                .take_while(|stmt| matches!(stmt, SyntaxNode::ImportDeclaration(_)))
                .last();
            let anchor = last_leading.map_or(Anchor::Top, |stmt| Anchor::After(stmt.node()));

            tracing::debug!(module, specifiers = names.len(), "creating import");
            insert_statement_text(tree, patches, anchor, &text);
            true
        }
    }
}

fn merge_into(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    printer: &Printer,
    import: ImportDeclaration<'_>,
    specifiers: &[String],
) -> bool {
    let source = tree.source();
    let present = import.named_specifiers();
    let mut additions: Vec<String> = unique_names(specifiers)
        .into_iter()
        .filter(|name| !present.iter().any(|spec| spec.imported_name() == *name))
        .map(str::to_string)
        .collect();
    additions.sort_by(|a, b| compare_names(a, b));

    if let Some(list) = import.named_imports() {
        // Existing entries keep their text (`a as b`, `type T`).
        let original: Vec<(&str, String)> = present
            .iter()
            .map(|spec| (spec.imported_name(), spec.text().to_string()))
            .collect();
        let mut merged = original.clone();
        merged.extend(additions.iter().map(|name| (name.as_str(), name.clone())));
        merged.sort_by(|a, b| compare_names(a.0, b.0));

        if merged != original {
            let items: Vec<String> = merged.into_iter().map(|(_, text)| text).collect();
            let layout = list_layout(source, list, &present);
            patches.replace(list.byte_range(), printer.named_imports(&items, &layout));
        }
    } else if !additions.is_empty() {
        let list = printer.named_imports(&additions, &ListLayout::Inline);
        match import.clause() {
            Some(clause) if has_namespace(clause) => {
                // `* as ns` cannot share a declaration with a named list.
                let text = printer.import_declaration(
                    import.source_value().unwrap_or_default(),
                    &additions,
                );
                insert_statement_text(tree, patches, Anchor::After(import.node()), &text);
            }
            Some(clause) => patches.insert(clause.end_byte(), format!(", {list}")),
            None => {
                if let Some(module) = import.source_node() {
                    patches.insert(module.start_byte(), format!("{list} from "));
                }
            }
        }
    }

    tracing::debug!(added = additions.len(), "merged import specifiers");
    !additions.is_empty()
}

fn has_namespace(clause: omni_ast::Node<'_>) -> bool {
    let mut cursor = clause.walk();
    clause
        .named_children(&mut cursor)
        .any(|child| child.kind() == "namespace_import")
}

/// Keep a list that spanned lines one-per-line, trailing comma included.
fn list_layout(
    source: &str,
    list: omni_ast::Node<'_>,
    present: &[omni_ast::ImportSpecifier<'_>],
) -> ListLayout {
    let text = &source[list.byte_range()];
    if !text.contains('\n') {
        return ListLayout::Inline;
    }

    let close = list.end_byte().saturating_sub(1);
    let close_indent = line_indent(source, close).to_string();
    let item_indent = present.first().map_or_else(
        || format!("{close_indent}  "),
        |first| line_indent(source, first.byte_range().start).to_string(),
    );
    let tail = present
        .last()
        .map_or("", |last| &source[last.byte_range().end..close]);

    ListLayout::Multiline {
        item_indent,
        close_indent,
        trailing_comma: tail.contains(','),
    }
}
