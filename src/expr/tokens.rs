//! Postfix token handling
//!
//! Expression sources arrive as raw element text such as `|size 1 +|`. This
//! module strips the optional fence, splits the body into tokens and owns the
//! single rule for what counts as an integer literal.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Abs,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "abs" => Some(Operator::Abs),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Abs => "abs",
        }
    }

    /// Number of values popped from the stack
    pub fn arity(&self) -> usize {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Abs => 1,
        }
    }
}

/// One classified postfix token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Integer(i64),
    /// Constant name or operator; constants are looked up first
    Word(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw token. Integer literals win over everything else.
    pub fn classify(raw: &'a str) -> Result<Self> {
        Ok(match parse_integer(raw)? {
            Some(value) => Token::Integer(value),
            None => Token::Word(raw),
        })
    }
}

/// Check whether `text` is an optionally negative run of ASCII digits
pub fn is_integer_literal(text: &str) -> bool {
    INTEGER_LITERAL.is_match(text)
}

/// Parse `text` as an integer literal.
///
/// Returns `Ok(None)` when the text is not shaped like one, and
/// `IntegerOutOfRange` when it is but does not fit in an `i64`.
pub fn parse_integer(text: &str) -> Result<Option<i64>> {
    if !is_integer_literal(text) {
        return Ok(None);
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|_| Error::IntegerOutOfRange {
            literal: text.to_string(),
        })
}

/// Remove a surrounding `|...|` fence if the source starts and ends with `|`.
///
/// A lone `|` counts as both ends and leaves an empty body.
pub fn strip_fence(source: &str) -> &str {
    let trimmed = source.trim();
    if !(trimmed.starts_with('|') && trimmed.ends_with('|')) {
        return trimmed;
    }
    match trimmed.len() {
        1 => "",
        len => trimmed[1..len - 1].trim(),
    }
}

/// Split an expression source into raw tokens
pub fn tokenize(source: &str) -> Vec<&str> {
    strip_fence(source).split_whitespace().collect()
}
