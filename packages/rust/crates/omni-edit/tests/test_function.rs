//! Tests for updateFunctionBody - matching shapes and body printing.

use omni_edit::{
    EditAction, EditFailure, EditRequest, EditResult, ErrorKind, Payload, Selector, edit,
};

fn update(content: &str, name: &str, body: &str) -> Result<EditResult, EditFailure> {
    let request = EditRequest::new(EditAction::UpdateFunctionBody, content)
        .with_selector(Selector {
            function_name: Some(name.to_string()),
            ..Selector::default()
        })
        .with_payload(Payload {
            function_body: Some(body.to_string()),
            ..Payload::default()
        });
    edit(&request)
}

#[test]
fn test_function_declaration() {
    let result = update(
        "function greet(name) {\n  return 'hi';\n}\n",
        "greet",
        "return `hello ${name}`;",
    )
    .expect("update");
    assert!(result.applied);
    assert_eq!(result.code, "function greet(name) {\n  return `hello ${name}`;\n}\n");
}

#[test]
fn test_signature_untouched() {
    let content = "async function load(url: string): Promise<void> {\n  await x;\n}\n";
    let result = update(content, "load", "await fetch(url);").expect("update");
    assert_eq!(
        result.code,
        "async function load(url: string): Promise<void> {\n  await fetch(url);\n}\n"
    );
}

#[test]
fn test_arrow_block_body() {
    let result = update(
        "const add = (a, b) => {\n  return 0;\n};\n",
        "add",
        "return a + b;",
    )
    .expect("update");
    assert_eq!(result.code, "const add = (a, b) => {\n  return a + b;\n};\n");
}

#[test]
fn test_arrow_expression_body_becomes_block() {
    let result = update("const f = () => 1;\n", "f", "return 2;").expect("update");
    assert!(result.applied);
    assert_eq!(result.code, "const f = () => {\n  return 2;\n};\n");
}

#[test]
fn test_export_default_function() {
    let result = update(
        "export default function App() {\n  return null;\n}\n",
        "App",
        "return <div />;",
    )
    .expect("update");
    assert_eq!(
        result.code,
        "export default function App() {\n  return <div />;\n}\n"
    );
}

#[test]
fn test_nested_body_is_reindented() {
    let result = update(
        "function f() {\n  a();\n}\n",
        "f",
        "if (x) {\n  y();\n}\nreturn z;",
    )
    .expect("update");
    assert_eq!(
        result.code,
        "function f() {\n  if (x) {\n    y();\n  }\n  return z;\n}\n"
    );
}

#[test]
fn test_template_literal_lines_untouched() {
    let result = update("function f() {}\n", "f", "const s = `a\n  b`;\nreturn s;").expect("update");
    assert_eq!(
        result.code,
        "function f() {\n  const s = `a\n  b`;\n  return s;\n}\n"
    );
}

#[test]
fn test_first_match_in_document_order() {
    let result = update("const f = () => 1;\nfunction f() {}\n", "f", "return 2;").expect("update");
    assert_eq!(
        result.code,
        "const f = () => {\n  return 2;\n};\nfunction f() {}\n"
    );
}

#[test]
fn test_soft_miss() {
    let content = "function f() {\n  return 1;\n}\n";
    let result = update(content, "doesNotExist", "return 2;").expect("soft miss");
    assert!(!result.applied);
    assert_eq!(result.code, content);
    assert!(result.edits.is_empty());
}

#[test]
fn test_soft_miss_skips_body_parse() {
    let result = update("const x = 1;\n", "missing", "}{").expect("soft miss");
    assert!(!result.applied);
}

#[test]
fn test_invalid_body_is_parse_error() {
    let failure = update("function f() {}\n", "f", "return (;").expect_err("invalid body");
    assert_eq!(failure.kind(), ErrorKind::Parse);
    assert!(failure.to_string().contains("Parse error in functionBody"));
}

#[test]
fn test_body_cannot_escape_function() {
    let failure =
        update("function f() {}\n", "f", "}\nfunction g() {").expect_err("escaping body");
    assert_eq!(failure.kind(), ErrorKind::Parse);
}
