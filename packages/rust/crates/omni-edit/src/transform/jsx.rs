//! JSX routines: replace the first element with a tag, or rewrite the
//! attribute list of its opening tag.

use std::ops::Range;

use omni_ast::{SyntaxNode, SyntaxTree, Visit, Visitor, parse_jsx_expression};
use serde_json::{Map, Value};

use crate::document::PatchSet;
use crate::error::EditError;
use crate::printer::{Printer, line_indent};

/// Stops at the first named JSX element whose tag is written as `tag`.
struct FirstJsxElement<'q> {
    tag: &'q str,
}

impl<'a> Visitor<'a> for FirstJsxElement<'_> {
    type Output = Range<usize>;

    fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<Range<usize>> {
        match node {
            SyntaxNode::JsxElement(element) if element.tag_name() == Some(self.tag) => {
                Visit::Stop(element.byte_range())
            }
            _ => Visit::Continue,
        }
    }
}

/// Where the attribute list of the matched opening tag lives.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeSlot {
    span: Range<usize>,
    self_closing: bool,
}

/// Stops at the first opening tag (self-closing included) written as `tag`.
struct FirstOpeningElement<'q> {
    tag: &'q str,
}

impl<'a> Visitor<'a> for FirstOpeningElement<'_> {
    type Output = AttributeSlot;

    fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<AttributeSlot> {
        let opening = match node {
            SyntaxNode::JsxOpeningElement(opening) => Some(opening),
            SyntaxNode::JsxElement(element) if element.is_self_closing() => element.opening(),
            _ => None,
        };
        match opening {
            Some(open) if open.tag_name() == Some(self.tag) => match open.attributes_span() {
                Some(span) => Visit::Stop(AttributeSlot {
                    span,
                    self_closing: open.is_self_closing(),
                }),
                None => Visit::Continue,
            },
            _ => Visit::Continue,
        }
    }
}

/// Replace the first `<tag>` element with `replacement`, which must parse to
/// a JSX element or fragment. The replacement is validated before the tree
/// is searched.
pub(crate) fn replace_jsx_element(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    tag: &str,
    replacement: &str,
) -> Result<bool, EditError> {
    let parsed = parse_jsx_expression(replacement).map_err(EditError::fragment("jsxReplaceWith"))?;
    if !parsed.is_jsx() {
        return Err(EditError::Validation(
            "jsxReplaceWith must be a JSX element or fragment".to_string(),
        ));
    }

    let Some(range) = tree.walk(&mut FirstJsxElement { tag }) else {
        tracing::debug!(tag, "no matching JSX element");
        return Ok(false);
    };

    let indent = line_indent(tree.source(), range.start);
    patches.replace(range, parsed.snippet.indented(indent, false));
    tracing::debug!(tag, "replaced JSX element");
    Ok(true)
}

/// Discard the attributes of the first `<tag ...>` and print `attributes`
/// in their place, in key order.
pub(crate) fn replace_jsx_attributes(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    printer: &Printer,
    tag: &str,
    attributes: &Map<String, Value>,
) -> bool {
    let Some(slot) = tree.walk(&mut FirstOpeningElement { tag }) else {
        tracing::debug!(tag, "no matching JSX opening element");
        return false;
    };

    let rendered: Vec<String> = attributes
        .iter()
        .map(|(name, value)| printer.jsx_attribute(name, value))
        .collect();

    let gap = &tree.source()[slot.span.clone()];
    let keep_space = slot.self_closing && gap.ends_with(char::is_whitespace);
    let mut text = String::new();
    if !rendered.is_empty() {
        text.push(' ');
        text.push_str(&rendered.join(" "));
    }
    if keep_space {
        text.push(' ');
    }

    patches.replace(slot.span, text);
    tracing::debug!(tag, count = rendered.len(), "replaced JSX attributes");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_visitor_finds_self_closing() {
        let source = "const v = <div><Btn x=\"1\" /></div>;";
        let tree = omni_ast::parse_module(source).expect("parse");
        let slot = tree
            .walk(&mut FirstOpeningElement { tag: "Btn" })
            .expect("match");
        assert!(slot.self_closing);
        assert_eq!(&source[slot.span], " x=\"1\" ");
    }

    #[test]
    fn test_element_visitor_ignores_fragments() {
        let tree = omni_ast::parse_module("const v = <><a /></>;").expect("parse");
        let range = tree
            .walk(&mut FirstJsxElement { tag: "a" })
            .expect("match");
        assert_eq!(range, 12..17);
    }
}
