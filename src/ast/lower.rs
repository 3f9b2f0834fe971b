//! Element to node lowering

use super::{Body, CommentKind, Literal, Node};
use crate::error::{Error, Result};
use crate::markup::Element;

/// Lower one element (and its subtree) into a typed node
pub fn lower(element: &Element) -> Result<Node> {
    match element.tag.as_str() {
        "const" => lower_const(element),
        "array" => lower_array(element),
        "value" => lower_value(element),
        "string" => Ok(Node::String {
            text: element.text.clone(),
        }),
        "comment" => Ok(Node::Comment {
            kind: CommentKind::from_attr(element.attr("type"))?,
            text: element.text.trim().to_string(),
        }),
        other => Err(Error::UnknownTag {
            tag: other.to_string(),
        }),
    }
}

fn lower_const(element: &Element) -> Result<Node> {
    let name = match element.attr("name") {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(Error::MissingConstantName),
    };

    let body = match element.find("expr") {
        Some(expr) => Body::Expr(expr.text.clone()),
        None => Body::Literal(Literal::classify(element.text.trim())),
    };
    Ok(Node::Const { name, body })
}

fn lower_array(element: &Element) -> Result<Node> {
    Ok(Node::Array {
        items: lower_array_items(element)?,
    })
}

fn lower_array_items(element: &Element) -> Result<Vec<Node>> {
    for skipped in element.children.iter().filter(|child| child.tag != "value") {
        log::warn!("Ignoring <{}> inside <array>; only <value> items are kept", skipped.tag);
    }
    element.find_all("value").map(lower_value).collect()
}

fn lower_value(element: &Element) -> Result<Node> {
    let body = if let Some(array) = element.find("array") {
        Body::Array(lower_array_items(array)?)
    } else if let Some(string) = element.find("string") {
        Body::String(string.text.clone())
    } else if let Some(expr) = element.find("expr") {
        Body::Expr(expr.text.clone())
    } else {
        Body::Literal(Literal::classify(element.text.trim()))
    };
    Ok(Node::Value { body })
}
