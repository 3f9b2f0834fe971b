//! Node compiler
//!
//! Renders one node into the output dialect:
//!
//! | node                | output                       |
//! |---------------------|------------------------------|
//! | `const`             | `const <name> = <value>`     |
//! | `array`             | `'( <item> <item> ... )`     |
//! | `value` / `string`  | `42`, `[[text]]`, or a list  |
//! | `comment` (line)    | `# <text>`                   |
//! | `comment` (multi)   | `=begin\n<text>\n=cut`       |
//!
//! Constants are resolved against the table as it stands when the node is
//! reached, so a name has to be declared by an earlier node before use.

use crate::ast::{self, Body, CommentKind, Literal, Node};
use crate::error::Result;
use crate::expr::{evaluate_source, ConstantTable, ConstantValue};
use crate::markup::Element;

/// Rendering of an array with no items
pub const EMPTY_ARRAY: &str = "'( )";

/// Compile a node, recording any constant it declares in `constants`
pub fn compile(node: &Node, constants: &mut ConstantTable) -> Result<String> {
    match node {
        Node::Const { name, body } => compile_const(name, body, constants),
        Node::Array { items } => compile_array(items, constants),
        Node::Value { body } => compile_value(body, constants),
        Node::String { text } => Ok(bracket(text)),
        Node::Comment { kind, text } => Ok(match kind {
            CommentKind::Line => format!("# {}", text),
            CommentKind::Multi => format!("=begin\n{}\n=cut", text),
        }),
    }
}

/// Lower a raw element and compile it
pub fn compile_element(element: &Element, constants: &mut ConstantTable) -> Result<String> {
    let node = ast::lower(element)?;
    compile(&node, constants)
}

fn compile_const(name: &str, body: &Body, constants: &mut ConstantTable) -> Result<String> {
    let value = match body {
        Body::Expr(source) => ConstantValue::Integer(evaluate_source(source, constants)?),
        // Integer-shaped text too wide for an i64 is kept as written
        Body::Literal(literal) => match literal.integer() {
            Some(value) => ConstantValue::Integer(value),
            None => ConstantValue::Text(literal.as_str().to_string()),
        },
        Body::String(text) => ConstantValue::Text(text.clone()),
        Body::Array(items) => ConstantValue::Text(compile_array(items, constants)?),
    };
    log::debug!("Defining constant {} = {}", name, value);
    let line = format!("const {} = {}", name, value);
    constants.define(name, value)?;
    Ok(line)
}

fn compile_array(items: &[Node], constants: &mut ConstantTable) -> Result<String> {
    if items.is_empty() {
        return Ok(EMPTY_ARRAY.to_string());
    }
    let rendered = items
        .iter()
        .map(|item| compile(item, constants))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("'( {} )", rendered.join(" ")))
}

fn compile_value(body: &Body, constants: &mut ConstantTable) -> Result<String> {
    match body {
        Body::Array(items) => compile_array(items, constants),
        Body::String(text) => Ok(bracket(text)),
        Body::Expr(source) => Ok(evaluate_source(source, constants)?.to_string()),
        Body::Literal(Literal::Integer(digits)) => Ok(digits.clone()),
        Body::Literal(Literal::Text(text)) => Ok(bracket(text)),
    }
}

fn bracket(text: &str) -> String {
    format!("[[{}]]", text)
}
