#![allow(clippy::doc_markdown)]

//! omni-edit - Structural Code Edits for JavaScript/TypeScript/JSX
//!
//! Applies one high-level edit (merge an import, swap a function body,
//! replace a JSX element or its attributes, insert statements) to a single
//! in-memory source file and reports the rewritten code with a line diff.
//! Code the edit does not touch is copied through byte for byte.
//!
//! # Features
//!
//! - **Import Merge**: Idempotent `upsertImport` with sorted named specifiers
//! - **Function Bodies**: Replace the body of a declaration, arrow or default export
//! - **JSX**: First-match element and attribute replacement
//! - **Diff Report**: Coalesced edit ranges plus a capped preview
//! - **Guard Layer**: Size limit and normalized `AST edit failed: ...` errors
//!
//! # Architecture
//!
//! ```text
//! omni-edit/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # EditError, EditFailure (thiserror)
//! ├── types.rs      # EditRequest, EditResult, EditConfig
//! ├── document.rs   # Parsed tree + pending patches
//! ├── printer.rs    # Splices patches, renders new nodes
//! ├── dispatch.rs   # Request validation and routing
//! ├── transform/    # One routine per action
//! ├── diff.rs       # Edit ranges and preview diff
//! ├── editor.rs     # AstEditor guard layer
//! └── main.rs       # omni-edit CLI
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_edit::{EditAction, EditRequest, Payload};
//!
//! let request = EditRequest::new(EditAction::InsertAfterLastImport, source)
//!     .with_payload(Payload {
//!         insert_text: Some("const c = 1;".into()),
//!         ..Payload::default()
//!     });
//! let result = omni_edit::edit(&request)?;
//! if result.applied {
//!     std::fs::write(path, &result.code)?;
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod diff;
mod dispatch;
mod document;
mod editor;
mod error;
mod printer;
mod transform;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use editor::{AstEditor, FileEdit, edit};
pub use error::{EditError, EditFailure, ErrorKind};
pub use types::{
    EditAction, EditConfig, EditRange, EditRequest, EditResult, ImportPayload, Payload,
    PrintConfig, QuoteStyle, Selector,
};

// Document model and printer for hosts that batch their own patches
pub use document::{Document, Patch, PatchSet};
pub use printer::{ListLayout, Printer};

// Re-export diff utilities for external use
pub use diff::{
    ChangeReport, ChunkTag, DiffChunk, TRUNCATION_MARKER, change_report, edit_ranges,
    generate_unified_diff, line_chunks, render_preview,
};
