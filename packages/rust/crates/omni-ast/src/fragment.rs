//! Fragment parser: parse injected snippets inside a throwaway shell.
//!
//! Bodies and bare expressions are not valid modules on their own, so they
//! are wrapped (`function temp() { ... }`, `const __t = ( ... );`) before
//! parsing. The snippet always starts and ends on its own line inside the
//! shell, so trailing line comments cannot swallow the closing tokens.

use tree_sitter::Node;

use crate::error::ParseError;
use crate::node::{SyntaxNode, named_children, unparenthesize};
use crate::parser::{is_trivia, parse_tree};
use crate::snippet::Snippet;

const JSX_SHELL: (&str, &str) = ("const __t = (\n", "\n);");

/// Shell a function body is parsed in, matching the target function's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionShell {
    /// `function temp() { ... }`
    Declaration,
    /// `const temp = () => { ... };`
    Arrow,
}

impl FunctionShell {
    fn wrap(self) -> (&'static str, &'static str) {
        match self {
            Self::Declaration => ("function temp() {\n", "\n}"),
            Self::Arrow => ("const temp = () => {\n", "\n};"),
        }
    }

    /// Pull the body block out of the single statement the shell parses to.
    fn body(self, stmt: Node<'_>) -> Option<Node<'_>> {
        match self {
            Self::Declaration => (stmt.kind() == "function_declaration")
                .then(|| stmt.child_by_field_name("body"))
                .flatten(),
            Self::Arrow => declarator_value(stmt)
                .filter(|value| value.kind() == "arrow_function")
                .and_then(|arrow| arrow.child_by_field_name("body")),
        }
        .filter(|body| body.kind() == "statement_block")
    }
}

/// What a parsed bare expression turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// `<A ...>...</A>` or `<A />`.
    JsxElement,
    /// `<>...</>`.
    JsxFragment,
    /// Any other expression, with its grammar kind.
    Other(&'static str),
}

/// A bare expression parsed through the fragment shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    /// Classification of the expression.
    pub kind: ExpressionKind,
    /// Expression source, dedented.
    pub snippet: Snippet,
}

impl ParsedExpression {
    /// Whether the expression is a JSX element or fragment.
    #[must_use]
    pub fn is_jsx(&self) -> bool {
        matches!(
            self.kind,
            ExpressionKind::JsxElement | ExpressionKind::JsxFragment
        )
    }
}

/// Parse a function body (a statement list without braces).
///
/// # Errors
///
/// Returns `ParseError` if the body is invalid or closes the shell early.
pub fn parse_function_body(text: &str, shell: FunctionShell) -> Result<Snippet, ParseError> {
    let (prefix, suffix) = shell.wrap();
    let wrapped = format!("{prefix}{text}{suffix}");
    let tree = parse_tree(&wrapped).map_err(|e| e.shift_lines(1))?;
    let root = tree.root_node();

    let body = single_statement(root)
        .and_then(|stmt| shell.body(stmt))
        .ok_or(ParseError::EscapedShell("function body"))?;

    Ok(snippet_of(&wrapped, root, &named_children(body)))
}

/// Parse a bare expression such as a JSX replacement.
///
/// # Errors
///
/// Returns `ParseError` if the text is not exactly one valid expression.
pub fn parse_jsx_expression(text: &str) -> Result<ParsedExpression, ParseError> {
    let (prefix, suffix) = JSX_SHELL;
    let wrapped = format!("{prefix}{text}{suffix}");
    let tree = parse_tree(&wrapped).map_err(|e| e.shift_lines(1))?;
    let root = tree.root_node();

    let expr = single_statement(root)
        .and_then(declarator_value)
        .filter(|value| value.kind() == "parenthesized_expression")
        .and_then(|paren| {
            let inner: Vec<_> = named_children(paren)
                .into_iter()
                .filter(|child| child.kind() != "comment")
                .collect();
            (inner.len() == 1).then(|| inner[0])
        })
        .map(unparenthesize)
        .ok_or(ParseError::EscapedShell("expression"))?;

    let kind = match SyntaxNode::from_node(expr, &wrapped) {
        SyntaxNode::JsxElement(_) => ExpressionKind::JsxElement,
        SyntaxNode::JsxFragment(_) => ExpressionKind::JsxFragment,
        other => ExpressionKind::Other(other.kind()),
    };

    Ok(ParsedExpression {
        kind,
        snippet: Snippet::from_region(&wrapped, root, expr.byte_range()),
    })
}

/// Parse a list of top-level statements (imports allowed).
///
/// # Errors
///
/// Returns `ParseError` if the text is not a valid module.
pub fn parse_statements(text: &str) -> Result<Snippet, ParseError> {
    let tree = parse_tree(text)?;
    let root = tree.root_node();
    let items: Vec<_> = named_children(root)
        .into_iter()
        .filter(|node| node.kind() != "hash_bang_line")
        .collect();
    Ok(snippet_of(text, root, &items))
}

fn snippet_of(source: &str, root: Node<'_>, items: &[Node<'_>]) -> Snippet {
    match (items.first(), items.last()) {
        (Some(first), Some(last)) => {
            Snippet::from_region(source, root, first.start_byte()..last.end_byte())
        }
        _ => Snippet::default(),
    }
}

/// The only non-trivia top-level statement, if there is exactly one.
fn single_statement(root: Node<'_>) -> Option<Node<'_>> {
    let mut statements = named_children(root)
        .into_iter()
        .filter(|node| !is_trivia(*node));
    let first = statements.next()?;
    statements.next().is_none().then_some(first)
}

/// Initializer of the first declarator of a `const` statement.
fn declarator_value(stmt: Node<'_>) -> Option<Node<'_>> {
    if stmt.kind() != "lexical_declaration" {
        return None;
    }
    named_children(stmt)
        .into_iter()
        .find(|child| child.kind() == "variable_declarator")
        .and_then(|decl| decl.child_by_field_name("value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_escaping_shell_is_rejected() {
        let err = parse_function_body("}\nfunction other() {", FunctionShell::Declaration)
            .expect_err("escapes shell");
        assert_eq!(err, ParseError::EscapedShell("function body"));
    }

    #[test]
    fn test_expression_escaping_shell_is_rejected() {
        let err = parse_jsx_expression("a) + (b").expect_err("escapes shell");
        assert_eq!(err, ParseError::EscapedShell("expression"));
    }

    #[test]
    fn test_error_lines_are_snippet_relative() {
        let err = parse_function_body("a();\nconst = ;", FunctionShell::Declaration)
            .expect_err("invalid body");
        match err {
            ParseError::UnexpectedToken { line, .. } | ParseError::Missing { line, .. } => {
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
