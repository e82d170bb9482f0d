//! Grammar parser: source text to a validated TSX syntax tree.
//!
//! Every call builds its own parser; nothing is cached between calls.

use tree_sitter::{Node, Parser, Tree};

use crate::error::ParseError;
use crate::node::{SyntaxNode, named_children, node_text};
use crate::visit::{Visitor, walk};

/// A parsed module together with the text it was parsed from.
pub struct SyntaxTree {
    source: String,
    tree: Tree,
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("bytes", &self.source.len())
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}

/// Parse a TypeScript/JSX module.
///
/// Any syntax error is fatal: there is no error recovery and no partial
/// tree is returned.
///
/// # Errors
///
/// Returns `ParseError` when the grammar cannot be loaded or the source is
/// not valid under the TSX grammar.
pub fn parse_module(source: &str) -> Result<SyntaxTree, ParseError> {
    let tree = parse_tree(source)?;
    Ok(SyntaxTree {
        source: source.to_string(),
        tree,
    })
}

/// Parse and reject trees containing `ERROR` or `MISSING` nodes.
pub(crate) fn parse_tree(source: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
        .map_err(|e| ParseError::Language(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ParseError::Aborted)?;
    match first_error(tree.root_node()) {
        Some(err) => Err(err),
        None => Ok(tree),
    }
}

/// First error or missing node in pre-order, only descending into subtrees
/// that contain one.
fn first_error(root: Node<'_>) -> Option<ParseError> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        let point = node.start_position();
        if node.is_missing() {
            return Some(ParseError::Missing {
                expected: node.kind().to_string(),
                line: point.row + 1,
                column: point.column,
            });
        }
        if node.is_error() {
            return Some(ParseError::UnexpectedToken {
                line: point.row + 1,
                column: point.column,
            });
        }

        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Some(ParseError::UnexpectedToken { line: 1, column: 0 });
            }
        }
    }
}

impl SyntaxTree {
    /// The text this tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The `program` node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &str {
        node_text(node, &self.source)
    }

    /// Top-level statements in document order. Comments and a hashbang
    /// line are trivia and never appear here.
    #[must_use]
    pub fn statements(&self) -> Vec<SyntaxNode<'_>> {
        named_children(self.root())
            .into_iter()
            .filter(|node| !is_trivia(*node))
            .map(|node| SyntaxNode::from_node(node, &self.source))
            .collect()
    }

    /// Every top-level child, statements and trivia alike.
    #[must_use]
    pub fn top_level_nodes(&self) -> Vec<Node<'_>> {
        named_children(self.root())
    }

    /// Pre-order walk over the whole tree; see [`walk`].
    pub fn walk<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) -> Option<V::Output> {
        walk(self.root(), &self.source, visitor)
    }
}

/// Whether a top-level node is a comment or hashbang line.
#[must_use]
pub(crate) fn is_trivia(node: Node<'_>) -> bool {
    matches!(node.kind(), "comment" | "hash_bang_line")
}
