//! Edit dispatcher: check required request fields and route to a routine.

use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::EditError;
use crate::printer::Printer;
use crate::transform;
use crate::types::{EditAction, EditRequest};

/// A request whose required fields are known to be present.
#[derive(Debug, Clone, Copy)]
pub(crate) enum EditOperation<'r> {
    UpsertImport {
        module: &'r str,
        specifiers: &'r [String],
    },
    UpdateFunctionBody {
        function_name: &'r str,
        body: &'r str,
    },
    ReplaceJsxElement {
        tag: &'r str,
        replacement: &'r str,
    },
    ReplaceJsxAttributes {
        tag: &'r str,
        attributes: &'r Map<String, Value>,
    },
    InsertAfterLastImport {
        text: &'r str,
    },
    InsertAtTop {
        text: &'r str,
    },
}

/// Empty strings count as missing.
fn required<'r>(
    value: Option<&'r String>,
    action: EditAction,
    field: &str,
) -> Result<&'r str, EditError> {
    value
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EditError::Validation(format!("{action} requires {field}")))
}

impl<'r> EditOperation<'r> {
    /// Validate `request` for its action.
    pub(crate) fn from_request(request: &'r EditRequest) -> Result<Self, EditError> {
        let action = request.action;
        let selector = request.selector.as_ref();
        let payload = request.payload.as_ref();

        let operation = match action {
            EditAction::UpsertImport => {
                let import = payload.and_then(|p| p.import.as_ref()).ok_or_else(|| {
                    EditError::Validation(format!("{action} requires payload.import"))
                })?;
                Self::UpsertImport {
                    module: required(Some(&import.module), action, "payload.import.module")?,
                    specifiers: &import.specifiers,
                }
            }
            EditAction::UpdateFunctionBody => Self::UpdateFunctionBody {
                function_name: required(
                    selector.and_then(|s| s.function_name.as_ref()),
                    action,
                    "selector.functionName",
                )?,
                body: required(
                    payload.and_then(|p| p.function_body.as_ref()),
                    action,
                    "payload.functionBody",
                )?,
            },
            EditAction::ReplaceJsxElement => Self::ReplaceJsxElement {
                tag: required(
                    selector.and_then(|s| s.jsx_tag.as_ref()),
                    action,
                    "selector.jsxTag",
                )?,
                replacement: required(
                    payload.and_then(|p| p.jsx_replace_with.as_ref()),
                    action,
                    "payload.jsxReplaceWith",
                )?,
            },
            EditAction::ReplaceJsxAttributes => Self::ReplaceJsxAttributes {
                tag: required(
                    selector.and_then(|s| s.jsx_tag.as_ref()),
                    action,
                    "selector.jsxTag",
                )?,
                attributes: payload
                    .and_then(|p| p.jsx_attributes.as_ref())
                    .ok_or_else(|| {
                        EditError::Validation(format!("{action} requires payload.jsxAttributes"))
                    })?,
            },
            EditAction::InsertAfterLastImport => Self::InsertAfterLastImport {
                text: required(
                    payload.and_then(|p| p.insert_text.as_ref()),
                    action,
                    "payload.insertText",
                )?,
            },
            EditAction::InsertAtTop => Self::InsertAtTop {
                text: required(
                    payload.and_then(|p| p.insert_text.as_ref()),
                    action,
                    "payload.insertText",
                )?,
            },
        };
        Ok(operation)
    }

    /// Run the matching routine. Returns whether the edit applied.
    pub(crate) fn apply(self, document: &mut Document, printer: &Printer) -> Result<bool, EditError> {
        let Document { tree, patches } = document;
        match self {
            Self::UpsertImport { module, specifiers } => Ok(transform::upsert_import(
                tree, patches, printer, module, specifiers,
            )),
            Self::UpdateFunctionBody {
                function_name,
                body,
            } => transform::update_function_body(tree, patches, printer, function_name, body),
            Self::ReplaceJsxElement { tag, replacement } => {
                transform::replace_jsx_element(tree, patches, tag, replacement)
            }
            Self::ReplaceJsxAttributes { tag, attributes } => Ok(
                transform::replace_jsx_attributes(tree, patches, printer, tag, attributes),
            ),
            Self::InsertAfterLastImport { text } => {
                transform::insert_after_last_import(tree, patches, text)
            }
            Self::InsertAtTop { text } => transform::insert_at_top(tree, patches, text),
        }
    }
}
