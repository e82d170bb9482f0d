#![allow(clippy::doc_markdown)]

//! omni-ast - Syntax Trees for Structural JavaScript/TypeScript Edits
//!
//! Parses module-scoped TypeScript with JSX (decorators, class fields,
//! optional chaining, dynamic `import()` and friends) into a tree-sitter
//! tree, and exposes the handful of constructs the edit engine touches as
//! typed views.
//!
//! ## Architecture
//!
//! ```text
//! omni-ast/src/
//! ├── lib.rs        # Re-exports (entry point)
//! ├── error.rs      # ParseError
//! ├── parser.rs     # SyntaxTree, parse_module
//! ├── fragment.rs   # Snippet parsing inside throwaway shells
//! ├── snippet.rs    # Dedented snippet lines
//! ├── node.rs       # SyntaxNode typed views
//! └── visit.rs      # Pre-order visitor with early stop
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use omni_ast::{parse_module, SyntaxNode};
//!
//! let tree = parse_module("import { a } from 'x';\nconst b = () => a;")?;
//! for stmt in tree.statements() {
//!     if let SyntaxNode::ImportDeclaration(import) = stmt {
//!         assert_eq!(import.source_value(), Some("x"));
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod fragment;
mod node;
mod parser;
mod snippet;
mod visit;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::ParseError;

pub use parser::{SyntaxTree, parse_module};

pub use fragment::{
    ExpressionKind, FunctionShell, ParsedExpression, parse_function_body, parse_jsx_expression,
    parse_statements,
};

pub use snippet::{Snippet, SnippetLine};

pub use node::{
    ArrowFunctionExpression, ExportDefaultDeclaration, FunctionDeclaration, ImportDeclaration,
    ImportSpecifier, JsxAttribute, JsxElement, JsxFragment, JsxOpeningElement, SyntaxNode,
    VariableDeclaration, VariableDeclarator,
};

pub use visit::{Visit, Visitor, walk};

/// Re-exported tree-sitter node type so callers can hold ranges without
/// depending on tree-sitter directly.
pub use tree_sitter::Node;
