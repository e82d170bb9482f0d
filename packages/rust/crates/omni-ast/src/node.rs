//! Typed views over the syntax constructs the edit engine touches.
//!
//! `SyntaxNode` is a closed enum: every construct a transformation pattern
//! matches on has its own variant, everything else is `Other`. The views are
//! thin `Copy` wrappers around a tree-sitter node plus the source text.

use std::ops::Range;

use tree_sitter::Node;

/// Text of `node` within `source`, empty if the range is out of bounds.
pub(crate) fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Named children of `node`, in document order.
pub(crate) fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn child_of_kind<'a>(node: Node<'a>, kinds: &[&str]) -> Option<Node<'a>> {
    children(node)
        .into_iter()
        .find(|child| kinds.contains(&child.kind()))
}

/// Strip matching single or double quotes from a string literal.
fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Skip through `( ... )` wrappers to the inner expression.
pub(crate) fn unparenthesize(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        match named_children(node)
            .into_iter()
            .find(|child| child.kind() != "comment")
        {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

macro_rules! syntax_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            node: Node<'a>,
            source: &'a str,
        }

        impl<'a> $name<'a> {
            /// Underlying tree-sitter node.
            #[must_use]
            pub fn node(&self) -> Node<'a> {
                self.node
            }

            /// Source text covered by this node.
            #[must_use]
            pub fn text(&self) -> &'a str {
                node_text(self.node, self.source)
            }

            /// Byte range covered by this node.
            #[must_use]
            pub fn byte_range(&self) -> Range<usize> {
                self.node.byte_range()
            }
        }
    };
}

syntax_view!(
    /// `import ... from '...'` (including side-effect `import '...'`).
    ImportDeclaration
);
syntax_view!(
    /// One entry of a named import list: `a`, `a as b`, `type A`.
    ImportSpecifier
);
syntax_view!(
    /// `function name(...) { ... }`, optionally async or a generator.
    FunctionDeclaration
);
syntax_view!(
    /// `const`/`let`/`var` statement holding one or more declarators.
    VariableDeclaration
);
syntax_view!(
    /// `name = init` inside a variable declaration.
    VariableDeclarator
);
syntax_view!(
    /// `(...) => body`.
    ArrowFunctionExpression
);
syntax_view!(
    /// `export default ...`.
    ExportDefaultDeclaration
);
syntax_view!(
    /// A named JSX element, either `<A>...</A>` or self-closing `<A />`.
    JsxElement
);
syntax_view!(
    /// `<>...</>`.
    JsxFragment
);
syntax_view!(
    /// The opening tag of a JSX element. For a self-closing element this is
    /// the element node itself.
    JsxOpeningElement
);
syntax_view!(
    /// One attribute of an opening tag, `name="v"`, `name` or `{...spread}`.
    JsxAttribute
);

/// Closed set of syntax constructs the transformations match on.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    /// Import statement.
    ImportDeclaration(ImportDeclaration<'a>),
    /// Function (or generator) declaration.
    FunctionDeclaration(FunctionDeclaration<'a>),
    /// `const`/`let`/`var` statement.
    VariableDeclaration(VariableDeclaration<'a>),
    /// Single declarator.
    VariableDeclarator(VariableDeclarator<'a>),
    /// Arrow function.
    ArrowFunctionExpression(ArrowFunctionExpression<'a>),
    /// `export default` statement.
    ExportDefaultDeclaration(ExportDefaultDeclaration<'a>),
    /// Named JSX element.
    JsxElement(JsxElement<'a>),
    /// JSX fragment.
    JsxFragment(JsxFragment<'a>),
    /// Opening tag of a non self-closing element.
    JsxOpeningElement(JsxOpeningElement<'a>),
    /// JSX attribute.
    JsxAttribute(JsxAttribute<'a>),
    /// Anything the engine never edits directly.
    Other(Node<'a>),
}

impl<'a> SyntaxNode<'a> {
    /// Classify a tree-sitter node.
    #[must_use]
    pub fn from_node(node: Node<'a>, source: &'a str) -> Self {
        match node.kind() {
            "import_statement" => Self::ImportDeclaration(ImportDeclaration { node, source }),
            "function_declaration" | "generator_function_declaration" => {
                Self::FunctionDeclaration(FunctionDeclaration { node, source })
            }
            "lexical_declaration" | "variable_declaration" => {
                Self::VariableDeclaration(VariableDeclaration { node, source })
            }
            "variable_declarator" => Self::VariableDeclarator(VariableDeclarator { node, source }),
            "arrow_function" => {
                Self::ArrowFunctionExpression(ArrowFunctionExpression { node, source })
            }
            "export_statement" if child_of_kind(node, &["default"]).is_some() => {
                Self::ExportDefaultDeclaration(ExportDefaultDeclaration { node, source })
            }
            "jsx_element" => {
                let named = child_of_kind(node, &["jsx_opening_element"])
                    .is_some_and(|open| open.child_by_field_name("name").is_some());
                if named {
                    Self::JsxElement(JsxElement { node, source })
                } else {
                    Self::JsxFragment(JsxFragment { node, source })
                }
            }
            "jsx_self_closing_element" => Self::JsxElement(JsxElement { node, source }),
            "jsx_opening_element" if node.child_by_field_name("name").is_some() => {
                Self::JsxOpeningElement(JsxOpeningElement { node, source })
            }
            "jsx_attribute" => Self::JsxAttribute(JsxAttribute { node, source }),
            _ => Self::Other(node),
        }
    }

    /// Underlying tree-sitter node.
    #[must_use]
    pub fn node(&self) -> Node<'a> {
        match self {
            Self::ImportDeclaration(v) => v.node(),
            Self::FunctionDeclaration(v) => v.node(),
            Self::VariableDeclaration(v) => v.node(),
            Self::VariableDeclarator(v) => v.node(),
            Self::ArrowFunctionExpression(v) => v.node(),
            Self::ExportDefaultDeclaration(v) => v.node(),
            Self::JsxElement(v) => v.node(),
            Self::JsxFragment(v) => v.node(),
            Self::JsxOpeningElement(v) => v.node(),
            Self::JsxAttribute(v) => v.node(),
            Self::Other(node) => *node,
        }
    }

    /// Grammar kind of the underlying node.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.node().kind()
    }
}

impl<'a> ImportDeclaration<'a> {
    /// The module string node (`'react'`), absent for `import x = require(...)`.
    #[must_use]
    pub fn source_node(&self) -> Option<Node<'a>> {
        self.node.child_by_field_name("source")
    }

    /// Module specifier without quotes.
    #[must_use]
    pub fn source_value(&self) -> Option<&'a str> {
        self.source_node()
            .map(|node| unquote(node_text(node, self.source)))
    }

    /// The `import_clause` node, absent for side-effect imports.
    #[must_use]
    pub fn clause(&self) -> Option<Node<'a>> {
        child_of_kind(self.node, &["import_clause"])
    }

    /// The `{ ... }` list, if the import has one.
    #[must_use]
    pub fn named_imports(&self) -> Option<Node<'a>> {
        self.clause()
            .and_then(|clause| child_of_kind(clause, &["named_imports"]))
    }

    /// Entries of the `{ ... }` list in document order.
    #[must_use]
    pub fn named_specifiers(&self) -> Vec<ImportSpecifier<'a>> {
        self.named_imports()
            .map(|list| {
                named_children(list)
                    .into_iter()
                    .filter(|child| child.kind() == "import_specifier")
                    .map(|node| ImportSpecifier {
                        node,
                        source: self.source,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<'a> ImportSpecifier<'a> {
    /// Name exported by the module (`a` in `a as b`).
    #[must_use]
    pub fn imported_name(&self) -> &'a str {
        self.node
            .child_by_field_name("name")
            .map_or_else(|| self.text(), |name| unquote(node_text(name, self.source)))
    }

    /// Local binding (`b` in `a as b`, otherwise the imported name).
    #[must_use]
    pub fn local_name(&self) -> &'a str {
        self.node
            .child_by_field_name("alias")
            .map_or_else(|| self.imported_name(), |alias| node_text(alias, self.source))
    }
}

impl<'a> FunctionDeclaration<'a> {
    /// Declared name.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .map(|name| node_text(name, self.source))
    }

    /// The `{ ... }` body block.
    #[must_use]
    pub fn body(&self) -> Option<Node<'a>> {
        self.node.child_by_field_name("body")
    }
}

impl<'a> VariableDeclaration<'a> {
    /// Declarators in document order.
    #[must_use]
    pub fn declarators(&self) -> Vec<VariableDeclarator<'a>> {
        named_children(self.node)
            .into_iter()
            .filter(|child| child.kind() == "variable_declarator")
            .map(|node| VariableDeclarator {
                node,
                source: self.source,
            })
            .collect()
    }
}

impl<'a> VariableDeclarator<'a> {
    /// Bound name when the binding is a plain identifier (not a pattern).
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .filter(|name| name.kind() == "identifier")
            .map(|name| node_text(name, self.source))
    }

    /// Initializer expression.
    #[must_use]
    pub fn init(&self) -> Option<Node<'a>> {
        self.node.child_by_field_name("value")
    }

    /// Initializer when it is an arrow function, looking through parentheses.
    #[must_use]
    pub fn arrow_init(&self) -> Option<ArrowFunctionExpression<'a>> {
        self.init()
            .map(unparenthesize)
            .filter(|node| node.kind() == "arrow_function")
            .map(|node| ArrowFunctionExpression {
                node,
                source: self.source,
            })
    }
}

impl<'a> ArrowFunctionExpression<'a> {
    /// Body: a `{ ... }` block or a bare expression.
    #[must_use]
    pub fn body(&self) -> Option<Node<'a>> {
        self.node.child_by_field_name("body")
    }

    /// Whether the body is a `{ ... }` block.
    #[must_use]
    pub fn has_block_body(&self) -> bool {
        self.body()
            .is_some_and(|body| body.kind() == "statement_block")
    }
}

impl<'a> ExportDefaultDeclaration<'a> {
    /// The exported function declaration, if the export is a named function.
    #[must_use]
    pub fn function(&self) -> Option<FunctionDeclaration<'a>> {
        self.node
            .child_by_field_name("declaration")
            .filter(|decl| {
                matches!(
                    decl.kind(),
                    "function_declaration" | "generator_function_declaration"
                )
            })
            .map(|node| FunctionDeclaration {
                node,
                source: self.source,
            })
    }
}

impl<'a> JsxElement<'a> {
    /// Whether this is `<A />`.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.node.kind() == "jsx_self_closing_element"
    }

    /// Opening tag; the element itself when self-closing.
    #[must_use]
    pub fn opening(&self) -> Option<JsxOpeningElement<'a>> {
        let node = if self.is_self_closing() {
            self.node
        } else {
            child_of_kind(self.node, &["jsx_opening_element"])?
        };
        Some(JsxOpeningElement {
            node,
            source: self.source,
        })
    }

    /// Tag name as written (`Foo`, `ui.Button`, `svg:rect`).
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        self.opening().and_then(|open| open.tag_name())
    }
}

impl<'a> JsxOpeningElement<'a> {
    /// Whether this tag closes itself (`<A />`).
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.node.kind() == "jsx_self_closing_element"
    }

    /// Tag name as written.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .map(|name| node_text(name, self.source))
    }

    /// Attributes and spreads in document order.
    #[must_use]
    pub fn attributes(&self) -> Vec<JsxAttribute<'a>> {
        named_children(self.node)
            .into_iter()
            .filter(|child| matches!(child.kind(), "jsx_attribute" | "jsx_expression"))
            .map(|node| JsxAttribute {
                node,
                source: self.source,
            })
            .collect()
    }

    /// Bytes between the tag name (and any type arguments) and the closing
    /// `>` or `/>` (one token in the TSX grammar). Replacing this range
    /// rewrites the whole attribute list.
    #[must_use]
    pub fn attributes_span(&self) -> Option<Range<usize>> {
        let name = self.node.child_by_field_name("name")?;
        let mut start = name.end_byte();
        for child in children(self.node) {
            if child.start_byte() < name.end_byte() {
                continue;
            }
            match child.kind() {
                "type_arguments" => start = child.end_byte(),
                "/" | "/>" | ">" if !child.is_named() => {
                    return Some(start..child.start_byte());
                }
                _ => {}
            }
        }
        None
    }
}

impl<'a> JsxAttribute<'a> {
    /// Whether this is a `{...spread}` entry.
    #[must_use]
    pub fn is_spread(&self) -> bool {
        self.node.kind() == "jsx_expression"
    }

    /// Attribute name, `None` for spreads.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        if self.is_spread() {
            return None;
        }
        named_children(self.node)
            .into_iter()
            .next()
            .map(|name| node_text(name, self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'react'"), "react");
        assert_eq!(unquote("\"./a\""), "./a");
        assert_eq!(unquote("'mismatch\""), "'mismatch\"");
        assert_eq!(unquote("x"), "x");
    }
}
