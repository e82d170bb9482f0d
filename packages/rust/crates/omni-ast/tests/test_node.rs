//! Tests for node module - typed views.

use omni_ast::{SyntaxNode, Visit, Visitor, parse_module};

fn first_import(content: &str) -> (Vec<String>, Option<String>) {
    let tree = parse_module(content).expect("parse");
    let stmts = tree.statements();
    let SyntaxNode::ImportDeclaration(import) = stmts[0] else {
        panic!("expected import");
    };
    let names = import
        .named_specifiers()
        .iter()
        .map(|spec| spec.imported_name().to_string())
        .collect();
    (names, import.source_value().map(str::to_string))
}

#[test]
fn test_import_views() {
    let (names, source) = first_import("import D, { b as c, a, type T } from \"./mod\";");
    assert_eq!(names, vec!["b", "a", "T"]);
    assert_eq!(source.as_deref(), Some("./mod"));

    let (names, source) = first_import("import './side-effect';");
    assert!(names.is_empty());
    assert_eq!(source.as_deref(), Some("./side-effect"));
}

#[test]
fn test_alias_local_name() {
    let tree = parse_module("import { x as y } from 'm';").expect("parse");
    let SyntaxNode::ImportDeclaration(import) = tree.statements()[0] else {
        panic!("expected import");
    };
    let spec = import.named_specifiers()[0];
    assert_eq!(spec.imported_name(), "x");
    assert_eq!(spec.local_name(), "y");
}

#[test]
fn test_function_views() {
    let content = "const run = (async (x) => x * 2);\nexport default async function main() { run(1); }";
    let tree = parse_module(content).expect("parse");
    let stmts = tree.statements();

    let SyntaxNode::VariableDeclaration(decl) = stmts[0] else {
        panic!("expected declaration");
    };
    let declarator = decl.declarators()[0];
    assert_eq!(declarator.name(), Some("run"));
    let arrow = declarator.arrow_init().expect("parenthesized arrow");
    assert!(!arrow.has_block_body());

    let SyntaxNode::ExportDefaultDeclaration(export) = stmts[1] else {
        panic!("expected export default");
    };
    let func = export.function().expect("named function");
    assert_eq!(func.name(), Some("main"));
    assert_eq!(func.body().map(|b| tree.text(b)), Some("{ run(1); }"));
}

struct Openings(Vec<(String, Vec<String>, bool)>);

impl<'a> Visitor<'a> for Openings {
    type Output = ();

    fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<()> {
        let opening = match node {
            SyntaxNode::JsxOpeningElement(open) => Some(open),
            SyntaxNode::JsxElement(el) if el.is_self_closing() => el.opening(),
            _ => None,
        };
        if let Some(open) = opening {
            let attrs = open
                .attributes()
                .iter()
                .map(|attr| attr.name().unwrap_or("...").to_string())
                .collect();
            self.0.push((
                open.tag_name().unwrap_or_default().to_string(),
                attrs,
                open.is_self_closing(),
            ));
        }
        Visit::Continue
    }
}

#[test]
fn test_jsx_views() {
    let content = "const v = <ui.Panel id=\"p\" {...rest}><>x</><svg:rect hidden /></ui.Panel>;";
    let tree = parse_module(content).expect("parse");
    let mut openings = Openings(Vec::new());
    tree.walk(&mut openings);

    assert_eq!(
        openings.0,
        vec![
            ("ui.Panel".to_string(), vec!["id".to_string(), "...".to_string()], false),
            ("svg:rect".to_string(), vec!["hidden".to_string()], true),
        ]
    );
}

#[test]
fn test_attributes_span() {
    let content = "const v = <Btn x=\"1\" y={2} />;";
    let tree = parse_module(content).expect("parse");

    struct Span(Option<String>);
    impl<'a> Visitor<'a> for Span {
        type Output = ();
        fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<()> {
            if let SyntaxNode::JsxElement(el) = node
                && let Some(open) = el.opening()
                && let Some(span) = open.attributes_span()
            {
                self.0 = Some(open.text()[span.start - open.byte_range().start
                    ..span.end - open.byte_range().start]
                    .to_string());
                return Visit::Stop(());
            }
            Visit::Continue
        }
    }

    let mut span = Span(None);
    assert_eq!(tree.walk(&mut span), Some(()));
    assert_eq!(span.0.as_deref(), Some(" x=\"1\" y={2} "));
}

#[test]
fn test_attributes_span_tight_self_closing() {
    let content = "const v = <Btn x=\"1\"/>;";
    let tree = parse_module(content).expect("parse");

    struct Span(Option<std::ops::Range<usize>>);
    impl<'a> Visitor<'a> for Span {
        type Output = ();
        fn visit(&mut self, node: SyntaxNode<'a>) -> Visit<()> {
            if let SyntaxNode::JsxElement(el) = node
                && let Some(open) = el.opening()
            {
                self.0 = open.attributes_span();
                return Visit::Stop(());
            }
            Visit::Continue
        }
    }

    let mut span = Span(None);
    tree.walk(&mut span);
    let span = span.0.expect("self-closing tag has an attribute span");
    assert_eq!(&content[span], " x=\"1\"");
}
