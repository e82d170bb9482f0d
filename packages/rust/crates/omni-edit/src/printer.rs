//! Printer: regenerate source text from a patched document.
//!
//! Untouched regions are copied byte for byte. Only nodes the engine
//! introduces are rendered here, using the explicit `PrintConfig` style.

use omni_ast::Snippet;
use serde_json::Value;

use crate::document::Document;
use crate::types::PrintConfig;

/// Layout of a rendered `{ ... }` specifier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLayout {
    /// `{ a, b }`
    Inline,
    /// One specifier per line.
    Multiline {
        /// Indentation of each specifier line.
        item_indent: String,
        /// Indentation of the closing brace.
        close_indent: String,
        /// Keep a comma after the last specifier.
        trailing_comma: bool,
    },
}

/// Serializes documents and renders new nodes.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrintConfig,
}

impl Printer {
    /// Printer with an explicit style.
    #[must_use]
    pub fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    /// Style in use.
    #[must_use]
    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Final source text of `document`. Inserted text uses the line ending
    /// of the source's first line.
    #[must_use]
    pub fn print(&self, document: &Document) -> String {
        let source = document.source();
        document
            .patches
            .apply_with_line_ending(source, line_ending(source))
    }

    /// JavaScript string literal in the configured quote.
    #[must_use]
    pub fn string_literal(&self, value: &str) -> String {
        let quote = self.config.quote_style.as_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(quote);
        for ch in value.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            }
        }
        out.push(quote);
        out
    }

    /// `{ a, b }` list of import specifiers.
    #[must_use]
    pub fn named_imports(&self, specifiers: &[String], layout: &ListLayout) -> String {
        if specifiers.is_empty() {
            return "{}".to_string();
        }
        match layout {
            ListLayout::Inline => format!("{{ {} }}", specifiers.join(", ")),
            ListLayout::Multiline {
                item_indent,
                close_indent,
                trailing_comma,
            } => {
                let items = specifiers
                    .iter()
                    .map(|spec| format!("{item_indent}{spec}"))
                    .collect::<Vec<_>>()
                    .join(",\n");
                let comma = if *trailing_comma { "," } else { "" };
                format!("{{\n{items}{comma}\n{close_indent}}}")
            }
        }
    }

    /// A complete import declaration. No specifiers gives a side-effect
    /// import.
    #[must_use]
    pub fn import_declaration(&self, module: &str, specifiers: &[String]) -> String {
        let source = self.string_literal(module);
        if specifiers.is_empty() {
            format!("import {source};")
        } else {
            format!(
                "import {} from {source};",
                self.named_imports(specifiers, &ListLayout::Inline)
            )
        }
    }

    /// `{ ... }` block for a function body whose opening brace sits on a
    /// line indented by `base_indent`.
    #[must_use]
    pub fn block(&self, body: &Snippet, base_indent: &str) -> String {
        if body.is_empty() {
            return "{}".to_string();
        }
        let inner = format!("{base_indent}{}", self.config.indent_unit());
        format!("{{\n{}\n{base_indent}}}", body.indented(&inner, true))
    }

    /// One JSX attribute from a JSON value.
    ///
    /// Strings become string attributes, `true` a bare attribute, `false`
    /// an explicit `{false}`, numbers an expression container. Anything else
    /// is stringified the way JavaScript's `String()` would.
    #[must_use]
    pub fn jsx_attribute(&self, name: &str, value: &Value) -> String {
        match value {
            Value::String(text) => format!("{name}={}", self.jsx_string(text)),
            Value::Bool(true) => name.to_string(),
            Value::Bool(false) => format!("{name}={{false}}"),
            Value::Number(number) => format!("{name}={{{number}}}"),
            other => format!("{name}={}", self.jsx_string(&js_string(other))),
        }
    }

    /// JSX attribute strings have no escapes: switch quotes when the value
    /// contains the preferred one, and fall back to an expression container
    /// when it contains both.
    fn jsx_string(&self, text: &str) -> String {
        let preferred = self.config.quote_style.as_char();
        let alternate = self.config.quote_style.alternate();
        if !text.contains(preferred) {
            format!("{preferred}{text}{preferred}")
        } else if !text.contains(alternate) {
            format!("{alternate}{text}{alternate}")
        } else {
            format!("{{{}}}", self.string_literal(text))
        }
    }
}

/// JavaScript `String(value)` for JSON values.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Leading whitespace of the line containing `offset`.
pub(crate) fn line_indent(source: &str, offset: usize) -> &str {
    let start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[start..];
    let width = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &line[..width]
}

/// `"\r\n"` when the first line break of `source` is CRLF, else `"\n"`.
pub(crate) fn line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(i) if source[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}
