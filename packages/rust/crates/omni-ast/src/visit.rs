//! Pre-order traversal with explicit early stop.
//!
//! A visitor returns `Visit::Stop(value)` to halt the walk; `walk` then
//! returns that value without touching any further node. "First match wins"
//! is therefore a property of the visitor, not of the tree walker.

use tree_sitter::Node;

use crate::node::SyntaxNode;

/// Outcome of visiting one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<T> {
    /// Keep walking.
    Continue,
    /// Halt the walk and hand `T` back to the caller.
    Stop(T),
}

/// Callback invoked for every named node in pre-order.
pub trait Visitor<'a> {
    /// Value produced when the walk stops.
    type Output;

    /// Inspect one node.
    fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<Self::Output>;
}

/// Walk `root` depth-first in document order, visiting parents before
/// children. Returns the value of the first `Visit::Stop`, or `None` once
/// every node has been visited.
pub fn walk<'a, V: Visitor<'a>>(root: Node<'a>, source: &'a str, visitor: &mut V) -> Option<V::Output> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_named()
            && let Visit::Stop(found) = visitor.visit(SyntaxNode::from_node(node, source))
        {
            return Some(found);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_module;

    struct KindLog(Vec<&'static str>);

    impl<'a> Visitor<'a> for KindLog {
        type Output = ();

        fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<()> {
            self.0.push(node.kind());
            Visit::Continue
        }
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = parse_module("const a = () => b;").expect("parse");
        let mut log = KindLog(Vec::new());
        assert!(walk(tree.root(), tree.source(), &mut log).is_none());
        assert_eq!(
            log.0,
            vec![
                "program",
                "lexical_declaration",
                "variable_declarator",
                "identifier",
                "arrow_function",
                "formal_parameters",
                "identifier",
            ]
        );
    }
}
