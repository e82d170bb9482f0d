//! Tests for the guard layer - size limit, validation and error shape.

use omni_edit::{
    AstEditor, EditAction, EditConfig, EditError, EditRequest, ErrorKind, Payload, Selector, edit,
};

const LIMIT: usize = 1024 * 1024;

fn soft_miss_request(content: String) -> EditRequest {
    EditRequest::new(EditAction::UpdateFunctionBody, content)
        .with_selector(Selector {
            function_name: Some("missing".into()),
            ..Selector::default()
        })
        .with_payload(Payload {
            function_body: Some("return 1;".into()),
            ..Payload::default()
        })
}

/// A valid module of exactly `len` bytes: one line comment.
fn comment_of_len(len: usize) -> String {
    format!("//{}", "a".repeat(len - 2))
}

#[test]
fn test_one_byte_over_limit() {
    let failure = edit(&soft_miss_request(comment_of_len(LIMIT + 1))).expect_err("too large");
    assert_eq!(failure.kind(), ErrorKind::SizeLimit);
    assert!(matches!(
        failure.error,
        EditError::SizeLimit { size, limit } if size == LIMIT + 1 && limit == LIMIT
    ));
    assert!(
        failure
            .to_string()
            .starts_with("AST edit failed: Content too large: 1048577 bytes (limit: 1048576) (")
    );
}

#[test]
fn test_exactly_at_limit_is_parsed() {
    let result = edit(&soft_miss_request(comment_of_len(LIMIT))).expect("at limit");
    assert!(!result.applied);

    // Invalid content at the limit fails in the parser, not the guard.
    let invalid = format!("const = ;{}", comment_of_len(LIMIT - 9));
    assert_eq!(invalid.len(), LIMIT);
    let failure = edit(&soft_miss_request(invalid)).expect_err("invalid");
    assert_eq!(failure.kind(), ErrorKind::Parse);
}

#[test]
fn test_configured_limit() {
    let editor = AstEditor::with_config(EditConfig {
        max_content_bytes: 10,
        ..EditConfig::default()
    });
    let failure = editor
        .edit(&soft_miss_request("const a = 1;".into()))
        .expect_err("over custom limit");
    assert_eq!(failure.kind(), ErrorKind::SizeLimit);
}

#[test]
fn test_unknown_action() {
    let failure = AstEditor::new()
        .edit_json(r#"{"action":"renameSymbol","content":"f();"}"#)
        .expect_err("unknown action");
    assert_eq!(failure.kind(), ErrorKind::UnknownAction);
    assert!(
        failure
            .to_string()
            .starts_with("AST edit failed: Unknown action: renameSymbol (")
    );
}

#[test]
fn test_malformed_request() {
    let failure = AstEditor::new()
        .edit_json("{not json")
        .expect_err("malformed");
    assert_eq!(failure.kind(), ErrorKind::Request);
}

#[test]
fn test_missing_payload_field() {
    let request = EditRequest::new(EditAction::InsertAtTop, "f();\n");
    let failure = edit(&request).expect_err("missing insertText");
    assert_eq!(failure.kind(), ErrorKind::Validation);
    assert!(
        failure
            .to_string()
            .contains("insertAtTop requires payload.insertText")
    );
}

#[test]
fn test_missing_selector_field() {
    let request = EditRequest::new(EditAction::ReplaceJsxAttributes, "f();\n").with_payload(
        Payload {
            jsx_attributes: Some(serde_json::Map::new()),
            ..Payload::default()
        },
    );
    let failure = edit(&request).expect_err("missing jsxTag");
    assert!(
        failure
            .to_string()
            .contains("replaceJsxAttributes requires selector.jsxTag")
    );
}

#[test]
fn test_content_parsed_before_validation() {
    let request = EditRequest::new(EditAction::InsertAtTop, "const = ;");
    let failure = edit(&request).expect_err("invalid content");
    assert_eq!(failure.kind(), ErrorKind::Parse);
}

#[test]
fn test_edit_json_round_trip() {
    let json = r#"{
        "action": "insertAfterLastImport",
        "payload": { "insertText": "const c = 1;" },
        "content": "import a from 'a';\nf();\n"
    }"#;
    let result = AstEditor::new().edit_json(json).expect("edit");
    assert!(result.applied);
    assert_eq!(result.code, "import a from 'a';\nconst c = 1;\nf();\n");
    assert_eq!(result.edits.len(), 1);
    assert!(result.preview_diff.contains("+const c = 1;"));
}
