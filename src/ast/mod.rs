//! Typed node tree
//!
//! The compiler only ever sees these types. Raw [`Element`](crate::markup::Element)s
//! are turned into nodes by [`lower`], which is where tag names, attributes
//! and literal shapes get decided.

pub mod lower;

use crate::error::{Error, Result};
use crate::expr::tokens::is_integer_literal;
use serde::Serialize;

pub use lower::lower;

/// One node of the markup tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Const { name: String, body: Body },
    Array { items: Vec<Node> },
    Value { body: Body },
    String { text: String },
    Comment { kind: CommentKind, text: String },
}

impl Node {
    /// Tag this node was written with in the markup
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Const { .. } => "const",
            Node::Array { .. } => "array",
            Node::Value { .. } => "value",
            Node::String { .. } => "string",
            Node::Comment { .. } => "comment",
        }
    }

    pub fn constant(name: impl Into<String>, body: Body) -> Self {
        Node::Const {
            name: name.into(),
            body,
        }
    }

    pub fn value(body: Body) -> Self {
        Node::Value { body }
    }

    pub fn array(items: Vec<Node>) -> Self {
        Node::Array { items }
    }
}

/// Payload of a `const` or `value` node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Body {
    Literal(Literal),
    /// Raw postfix source, fence included
    Expr(String),
    /// Items of a nested array
    Array(Vec<Node>),
    String(String),
}

impl Body {
    pub fn literal(text: &str) -> Self {
        Body::Literal(Literal::classify(text))
    }

    pub fn expr(source: impl Into<String>) -> Self {
        Body::Expr(source.into())
    }
}

/// Plain text payload, classified once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Literal {
    /// Optionally negative run of decimal digits, as written
    Integer(String),
    Text(String),
}

impl Literal {
    pub fn classify(text: &str) -> Self {
        if is_integer_literal(text) {
            Literal::Integer(text.to_string())
        } else {
            Literal::Text(text.to_string())
        }
    }

    /// Source text of the literal
    pub fn as_str(&self) -> &str {
        match self {
            Literal::Integer(digits) => digits,
            Literal::Text(text) => text,
        }
    }

    /// Numeric value of the literal.
    ///
    /// `None` for text, and for integer-shaped literals that do not fit in
    /// an `i64`.
    pub fn integer(&self) -> Option<i64> {
        match self {
            Literal::Integer(digits) => digits.parse::<i64>().ok(),
            Literal::Text(_) => None,
        }
    }
}

/// The two comment flavours of the output dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    Line,
    Multi,
}

impl CommentKind {
    pub fn from_attr(kind: Option<&str>) -> Result<Self> {
        match kind {
            Some("line") => Ok(CommentKind::Line),
            Some("multi") => Ok(CommentKind::Multi),
            other => Err(Error::UnknownCommentType {
                kind: other.map(str::to_string),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_classification() {
        assert_eq!(Literal::classify("42"), Literal::Integer("42".to_string()));
        assert_eq!(Literal::classify("-007"), Literal::Integer("-007".to_string()));
        assert_eq!(Literal::classify("4 2"), Literal::Text("4 2".to_string()));
        assert_eq!(Literal::classify(""), Literal::Text(String::new()));
    }

    #[test]
    fn test_literal_integer_value() {
        assert_eq!(Literal::classify("-007").integer(), Some(-7));
        assert_eq!(Literal::classify("hello").integer(), None);
        assert_eq!(Literal::classify("123456789012345678901234567890").integer(), None);
    }

    #[test]
    fn test_comment_kind_from_attr() {
        assert_eq!(CommentKind::from_attr(Some("line")).unwrap(), CommentKind::Line);
        assert_eq!(CommentKind::from_attr(Some("multi")).unwrap(), CommentKind::Multi);
        assert_eq!(
            CommentKind::from_attr(Some("block")).unwrap_err(),
            Error::UnknownCommentType {
                kind: Some("block".to_string())
            }
        );
        assert_eq!(
            CommentKind::from_attr(None).unwrap_err(),
            Error::UnknownCommentType { kind: None }
        );
    }

    #[test]
    fn test_node_serializes_with_tag() {
        let node = Node::constant("size", Body::literal("42"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node"], "const");
        assert_eq!(json["name"], "size");
        assert_eq!(json["body"]["kind"], "literal");
        assert_eq!(json["body"]["content"]["kind"], "integer");
        assert_eq!(json["body"]["content"]["text"], "42");
    }
}
