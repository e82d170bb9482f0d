//! `updateFunctionBody`: swap the body block of a named top-level function.

use omni_ast::{FunctionShell, Node, SyntaxNode, SyntaxTree, parse_function_body};

use crate::document::PatchSet;
use crate::error::EditError;
use crate::printer::{Printer, line_indent};

/// First top-level function called `name`, in document order across
/// declarations, arrow-initialized declarators and `export default`.
fn find_function<'t>(tree: &'t SyntaxTree, name: &str) -> Option<(Node<'t>, FunctionShell)> {
    tree.statements().into_iter().find_map(|stmt| match stmt {
        SyntaxNode::FunctionDeclaration(func) if func.name() == Some(name) => {
            func.body().map(|body| (body, FunctionShell::Declaration))
        }
        SyntaxNode::VariableDeclaration(decl) => decl.declarators().into_iter().find_map(|d| {
            if d.name() != Some(name) {
                return None;
            }
            d.arrow_init()
                .and_then(|arrow| arrow.body())
                .map(|body| (body, FunctionShell::Arrow))
        }),
        SyntaxNode::ExportDefaultDeclaration(export) => export
            .function()
            .filter(|func| func.name() == Some(name))
            .and_then(|func| func.body())
            .map(|body| (body, FunctionShell::Declaration)),
        _ => None,
    })
}

/// Replace the body of `function_name` with `body`. The body is parsed only
/// once a target is found; no target is a soft miss.
pub(crate) fn update_function_body(
    tree: &SyntaxTree,
    patches: &mut PatchSet,
    printer: &Printer,
    function_name: &str,
    body: &str,
) -> Result<bool, EditError> {
    let Some((target, shell)) = find_function(tree, function_name) else {
        tracing::debug!(function_name, "no matching function");
        return Ok(false);
    };

    let snippet = parse_function_body(body, shell).map_err(EditError::fragment("functionBody"))?;
    let indent = line_indent(tree.source(), target.start_byte());
    // An expression-bodied arrow gets a block in place of its expression.
    patches.replace(target.byte_range(), printer.block(&snippet, indent));

    tracing::debug!(function_name, ?shell, "replaced function body");
    Ok(true)
}
