//! Tests for parser module - grammar coverage and error reporting.

use omni_ast::{ParseError, SyntaxNode, parse_module};

#[test]
fn test_accepts_modern_module_syntax() {
    let content = r#"
import React, { useState } from 'react';
import * as path from "node:path";
export * as utils from './utils';
export { default } from './App';

@Component({ selector: 'app' })
class Widget<T> {
  static count = 0;
  #secret?: string;
  @Input() label: string = '';

  async *stream(): AsyncGenerator<T> {
    const mod = await import('./lazy');
    yield mod?.value ?? null;
  }
}

const { a, ...rest } = { a: 1, b: 2, ...other };
export default function App(props: { title: string }) {
  return <div className="app">{props.title}<Widget /></div>;
}
"#;
    let tree = parse_module(content).expect("Should parse modern TSX");
    assert_eq!(tree.root().kind(), "program");
    assert!(tree.statements().len() >= 7);
}

#[test]
fn test_rejects_invalid_source() {
    let err = parse_module("function (").expect_err("Should reject");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { .. } | ParseError::Missing { .. }
    ));
    assert!(err.to_string().starts_with("Unexpected token"));
}

#[test]
fn test_empty_source_is_valid() {
    let tree = parse_module("").expect("Empty module parses");
    assert!(tree.statements().is_empty());
}

#[test]
fn test_statement_classification() {
    let content = "import a from 'a';\nfunction f() {}\nconst g = () => 1;\nexport default function h() {}\nf();";
    let tree = parse_module(content).expect("parse");
    let stmts = tree.statements();

    assert!(matches!(stmts[0], SyntaxNode::ImportDeclaration(_)));
    assert!(matches!(stmts[1], SyntaxNode::FunctionDeclaration(_)));
    assert!(matches!(stmts[2], SyntaxNode::VariableDeclaration(_)));
    assert!(matches!(stmts[3], SyntaxNode::ExportDefaultDeclaration(_)));
    assert!(matches!(stmts[4], SyntaxNode::Other(_)));
}
