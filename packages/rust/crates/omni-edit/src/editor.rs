//! Guard layer: the single entry point of the edit engine.
//!
//! Checks the size limit, runs parse → transform → print → diff, and turns
//! every hard error into an [`EditFailure`] carrying the elapsed time.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;

use crate::diff::{change_report, generate_unified_diff};
use crate::dispatch::EditOperation;
use crate::document::Document;
use crate::error::{EditError, EditFailure};
use crate::printer::Printer;
use crate::types::{EditConfig, EditRequest, EditResult};

/// Outcome of [`AstEditor::edit_file`]: the text that was read and the edit
/// result, so callers can summarize without reading the file again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdit {
    /// File content before the edit.
    pub original: String,
    /// Edit outcome.
    pub result: EditResult,
}

/// AstEditor - structural edit engine for JavaScript/TypeScript/JSX.
///
/// Holds no state besides its configuration; every call parses a fresh
/// tree, so one editor can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use omni_edit::{AstEditor, EditAction, EditRequest, ImportPayload, Payload};
///
/// let request = EditRequest::new(EditAction::UpsertImport, "import { b } from 'x';\n")
///     .with_payload(Payload {
///         import: Some(ImportPayload { module: "x".into(), specifiers: vec!["a".into()] }),
///         ..Payload::default()
///     });
/// let result = AstEditor::new().edit(&request)?;
/// assert_eq!(result.code, "import { a, b } from 'x';\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AstEditor {
    config: EditConfig,
}

impl AstEditor {
    /// Editor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor with an explicit configuration.
    #[must_use]
    pub fn with_config(config: EditConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Apply one edit to `request.content`.
    ///
    /// A missing target is not an error: the result has `applied == false`
    /// and `code` equal to the input.
    ///
    /// # Errors
    ///
    /// Returns `EditFailure` for oversized content, parse errors in the
    /// content or a payload snippet, and missing or invalid request fields.
    pub fn edit(&self, request: &EditRequest) -> Result<EditResult, EditFailure> {
        let started = Instant::now();
        self.run(request, started)
            .map_err(|error| fail(error, started))
    }

    /// Decode a JSON request and apply it. Decoding failures, including an
    /// unknown action, are reported like any other hard failure.
    ///
    /// # Errors
    ///
    /// See [`AstEditor::edit`].
    pub fn edit_json(&self, json: &str) -> Result<EditResult, EditFailure> {
        let started = Instant::now();
        EditRequest::from_json(json)
            .and_then(|request| self.run(&request, started))
            .map_err(|error| fail(error, started))
    }

    /// Read `path` into `request.content`, apply the edit and, when `write`
    /// is set and the edit applied, write `code` back to the same path.
    ///
    /// The size guard runs on the file metadata, before any byte is read.
    ///
    /// # Errors
    ///
    /// See [`AstEditor::edit`]; I/O failures surface as `EditError::Io`.
    pub fn edit_file<P: AsRef<Path>>(
        &self,
        path: P,
        request: &EditRequest,
        write: bool,
    ) -> Result<FileEdit, EditFailure> {
        let path = path.as_ref();
        let started = Instant::now();

        let original = self
            .read_source(path)
            .map_err(|error| fail(error, started))?;
        let request = EditRequest {
            content: original,
            ..request.clone()
        };
        let result = self
            .run(&request, started)
            .map_err(|error| fail(error, started))?;

        if write && result.applied {
            std::fs::write(path, &result.code).map_err(|e| fail(e.into(), started))?;
            tracing::info!(path = %path.display(), "wrote edited file");
        }
        Ok(FileEdit {
            original: request.content,
            result,
        })
    }

    fn read_source(&self, path: &Path) -> Result<String, EditError> {
        let limit = self.config.max_content_bytes;
        let len = std::fs::metadata(path)?.len();
        if len > u64::try_from(limit).unwrap_or(u64::MAX) {
            return Err(EditError::SizeLimit {
                size: usize::try_from(len).unwrap_or(usize::MAX),
                limit,
            });
        }
        Ok(std::fs::read_to_string(path)?)
    }

    fn run(&self, request: &EditRequest, started: Instant) -> Result<EditResult, EditError> {
        let size = request.content.len();
        let limit = self.config.max_content_bytes;
        if size > limit {
            return Err(EditError::SizeLimit { size, limit });
        }

        tracing::debug!(action = %request.action, bytes = size, "AST edit start");

        let mut document = Document::parse(&request.content)?;
        let operation = EditOperation::from_request(request)?;
        let printer = Printer::new(self.config.print.clone());
        let applied = operation.apply(&mut document, &printer)?;

        let code = printer.print(&document);
        let report = change_report(&request.content, &code, self.config.max_preview_lines);
        let elapsed_ms = elapsed_ms(started);

        tracing::debug!(
            action = %request.action,
            applied,
            edits = report.edits.len(),
            elapsed_ms,
            "AST edit done"
        );

        Ok(EditResult {
            applied,
            code,
            edits: report.edits,
            preview_diff: report.preview,
            elapsed_ms,
        })
    }

    /// Format edit result for display.
    ///
    /// Returns a human-readable summary of the changes.
    #[must_use]
    pub fn format_result(original: &str, result: &EditResult, path: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(p) = path {
            let _ = writeln!(output, "// EDIT: {p}");
        }
        let _ = writeln!(output, "// Applied: {}", result.applied);

        if !result.applied {
            output.push_str("[No matching target]\n");
            return output;
        }

        output.push_str("\n// Changes:\n");
        for range in &result.edits {
            let _ = writeln!(output, "L{}-L{}", range.start, range.end);
        }

        output.push_str("\n// Diff:\n");
        output.push_str(&generate_unified_diff(original, &result.code));

        output
    }
}

/// Apply `request` with the default configuration.
///
/// # Errors
///
/// See [`AstEditor::edit`].
pub fn edit(request: &EditRequest) -> Result<EditResult, EditFailure> {
    AstEditor::new().edit(request)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn fail(error: EditError, started: Instant) -> EditFailure {
    let failure = EditFailure {
        error,
        elapsed_ms: elapsed_ms(started),
    };
    tracing::warn!(kind = ?failure.kind(), "{failure}");
    failure
}
