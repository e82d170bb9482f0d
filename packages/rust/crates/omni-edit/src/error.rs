//! Error types for structural editing operations.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use omni_ast::ParseError;
use thiserror::Error;

/// Error types for edit operations.
///
/// Each variant represents a specific failure mode in the editing pipeline.
/// A target that simply is not there is not an error; see
/// `EditResult::applied`.
#[derive(Error, Debug)]
pub enum EditError {
    /// Content exceeds the size guard; nothing was parsed.
    #[error("Content too large: {size} bytes (limit: {limit})")]
    SizeLimit {
        /// Content size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// Failed to parse the file content.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Failed to parse an injected snippet.
    #[error("Parse error in {fragment}: {source}")]
    Fragment {
        /// Payload field holding the snippet.
        fragment: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// Required selector/payload field missing or payload of the wrong shape.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Action tag not among the supported six.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Request JSON could not be decoded.
    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),

    /// Reading or writing a file failed (file helpers only).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`EditError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Content over the size limit.
    SizeLimit,
    /// Content or a snippet failed to parse.
    Parse,
    /// Missing fields or a replacement of the wrong kind.
    Validation,
    /// Unsupported action tag.
    UnknownAction,
    /// Undecodable request.
    Request,
    /// File I/O.
    Io,
}

impl EditError {
    /// Classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SizeLimit { .. } => ErrorKind::SizeLimit,
            Self::Parse(_) | Self::Fragment { .. } => ErrorKind::Parse,
            Self::Validation(_) => ErrorKind::Validation,
            Self::UnknownAction(_) => ErrorKind::UnknownAction,
            Self::Request(_) => ErrorKind::Request,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn fragment(fragment: &'static str) -> impl FnOnce(ParseError) -> Self {
        move |source| Self::Fragment { fragment, source }
    }
}

/// Normalized hard failure returned across the engine boundary.
#[derive(Error, Debug)]
#[error("AST edit failed: {error} ({elapsed_ms}ms)")]
pub struct EditFailure {
    /// What went wrong.
    #[source]
    pub error: EditError,
    /// Wall-clock time until the failure.
    pub elapsed_ms: u64,
}

impl EditFailure {
    /// Classification of the underlying error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}
