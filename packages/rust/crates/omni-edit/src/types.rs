//! Core types for structural editing.
//!
//! Request/result shapes use camelCase on the wire so hosts can pass the
//! same JSON the tool-call layer produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::EditError;

/// The six supported edit actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditAction {
    /// Merge named specifiers into an import, creating it if needed.
    UpsertImport,
    /// Replace the body of a top-level function.
    UpdateFunctionBody,
    /// Replace the first JSX element with a given tag.
    ReplaceJsxElement,
    /// Replace the attribute list of the first opening tag with a given tag.
    ReplaceJsxAttributes,
    /// Insert statements after the last import declaration.
    InsertAfterLastImport,
    /// Insert statements at the very top of the file.
    InsertAtTop,
}

impl EditAction {
    /// Every action, in dispatch-table order.
    pub const ALL: [Self; 6] = [
        Self::UpsertImport,
        Self::UpdateFunctionBody,
        Self::ReplaceJsxElement,
        Self::ReplaceJsxAttributes,
        Self::InsertAfterLastImport,
        Self::InsertAtTop,
    ];

    /// Wire tag of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpsertImport => "upsertImport",
            Self::UpdateFunctionBody => "updateFunctionBody",
            Self::ReplaceJsxElement => "replaceJsxElement",
            Self::ReplaceJsxAttributes => "replaceJsxAttributes",
            Self::InsertAfterLastImport => "insertAfterLastImport",
            Self::InsertAtTop => "insertAtTop",
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditAction {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| EditError::UnknownAction(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for EditAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Which syntactic element an edit targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    /// Function to update (`updateFunctionBody`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    /// JSX tag name as written (`replaceJsxElement`, `replaceJsxAttributes`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_tag: Option<String>,
}

/// Module and named specifiers for `upsertImport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPayload {
    /// Module string, compared verbatim against existing imports.
    pub module: String,
    /// Names to import; each binds 1:1 to a local of the same name.
    #[serde(default)]
    pub specifiers: Vec<String>,
}

/// New content carried by an edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// `upsertImport`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportPayload>,
    /// `updateFunctionBody`: statements without the surrounding braces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_body: Option<String>,
    /// `replaceJsxElement`: a JSX element or fragment expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_replace_with: Option<String>,
    /// `replaceJsxAttributes`: attributes in output order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_attributes: Option<Map<String, Value>>,
    /// `insertAfterLastImport` / `insertAtTop`: top-level statements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
}

/// One edit against one in-memory source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    /// Edit to perform.
    pub action: EditAction,
    /// Target selection, required by some actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    /// New content, required by every action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    /// Full current text of the file.
    #[serde(default)]
    pub content: String,
}

/// Wire form used by [`EditRequest::from_json`], so that an unknown action
/// surfaces as `EditError::UnknownAction` rather than a generic decode error.
#[derive(Deserialize)]
struct WireRequest {
    action: String,
    #[serde(default)]
    selector: Option<Selector>,
    #[serde(default)]
    payload: Option<Payload>,
    #[serde(default)]
    content: String,
}

impl EditRequest {
    /// Request with no selector or payload yet.
    #[must_use]
    pub fn new(action: EditAction, content: impl Into<String>) -> Self {
        Self {
            action,
            selector: None,
            payload: None,
            content: content.into(),
        }
    }

    /// Set the selector.
    #[must_use]
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Set the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Decode a JSON request.
    ///
    /// # Errors
    ///
    /// `EditError::Request` for malformed JSON, `EditError::UnknownAction`
    /// for an unsupported action tag.
    pub fn from_json(json: &str) -> Result<Self, EditError> {
        let wire: WireRequest = serde_json::from_str(json)?;
        Ok(Self {
            action: wire.action.parse()?,
            selector: wire.selector,
            payload: wire.payload,
            content: wire.content,
        })
    }
}

/// One contiguous changed region, in context-line-counter coordinates.
///
/// `end` is `start - 1` for a run that only adds or only removes lines, so
/// both fields are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRange {
    /// Counter value when the change run started.
    pub start: i64,
    /// See the type docs.
    pub end: i64,
}

/// Outcome of a successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    /// `false` is a soft miss: no target found, `code` equals the input.
    pub applied: bool,
    /// Complete rewritten file.
    pub code: String,
    /// Changed line ranges in document order.
    pub edits: Vec<EditRange>,
    /// Prefixed line diff, capped in length.
    pub preview_diff: String,
    /// Wall-clock time spent in the engine.
    pub elapsed_ms: u64,
}

/// Quote character for newly printed string literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'text'`
    #[default]
    Single,
    /// `"text"`
    Double,
}

impl QuoteStyle {
    /// The quote character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    /// The other quote character.
    #[must_use]
    pub fn alternate(self) -> char {
        match self {
            Self::Single => '"',
            Self::Double => '\'',
        }
    }
}

/// Style applied to nodes the engine introduces. Untouched code keeps its
/// original formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Quote for new string literals.
    pub quote_style: QuoteStyle,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            quote_style: QuoteStyle::Single,
        }
    }
}

impl PrintConfig {
    /// One indentation level.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

/// Configuration for edit operations.
///
/// Controls the size guard, the preview cap and the printer style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditConfig {
    /// Maximum content size in bytes (default 1 MiB).
    pub max_content_bytes: usize,
    /// Maximum number of preview lines before truncation.
    pub max_preview_lines: usize,
    /// Printer style for new nodes.
    pub print: PrintConfig,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            max_content_bytes: 1024 * 1024, // 1MB
            max_preview_lines: 400,
            print: PrintConfig::default(),
        }
    }
}
