//! Stack evaluation of postfix expressions

use super::constants::ConstantTable;
use super::tokens::{tokenize, Operator, Token};
use crate::error::{Error, Result};

/// Evaluate a postfix token sequence against `constants`.
///
/// Blank tokens are skipped. The stack must hold exactly one value once all
/// tokens are consumed.
pub fn evaluate<S: AsRef<str>>(tokens: &[S], constants: &ConstantTable) -> Result<i64> {
    let mut stack: Vec<i64> = Vec::with_capacity(tokens.len());

    for raw in tokens.iter().map(|t| t.as_ref().trim()) {
        if raw.is_empty() {
            continue;
        }
        match Token::classify(raw)? {
            Token::Integer(value) => stack.push(value),
            Token::Word(word) => {
                if let Some(value) = constants.integer(word)? {
                    stack.push(value);
                } else if let Some(op) = Operator::from_symbol(word) {
                    apply(op, &mut stack)?;
                } else {
                    return Err(Error::UnrecognizedToken {
                        token: word.to_string(),
                    });
                }
            }
        }
    }

    if stack.len() != 1 {
        return Err(Error::MalformedExpression {
            remaining: stack.len(),
        });
    }
    Ok(stack[0])
}

/// Tokenize an expression source (fence included) and evaluate it
pub fn evaluate_source(source: &str, constants: &ConstantTable) -> Result<i64> {
    let tokens = tokenize(source);
    log::debug!("Evaluating postfix expression {:?}", tokens);
    evaluate(tokens.as_slice(), constants)
}

fn apply(op: Operator, stack: &mut Vec<i64>) -> Result<()> {
    if stack.len() < op.arity() {
        return Err(Error::insufficient(op.symbol(), op.arity(), stack.len()));
    }
    let result = match op {
        Operator::Add | Operator::Sub => {
            // Right operand sits on top
            let b = stack.pop().unwrap_or_default();
            let a = stack.pop().unwrap_or_default();
            if op == Operator::Add {
                a.checked_add(b)
            } else {
                a.checked_sub(b)
            }
        }
        Operator::Abs => stack.pop().unwrap_or_default().checked_abs(),
    };
    stack.push(result.ok_or_else(|| Error::overflow(op.symbol()))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_constants() -> ConstantTable {
        ConstantTable::new()
    }

    #[test]
    fn test_evaluate_simple() {
        let constants = no_constants();
        assert_eq!(evaluate(&["2"], &constants).unwrap(), 2);
        assert_eq!(evaluate(&["-5", "abs"], &constants).unwrap(), 5);
        assert_eq!(evaluate(&["2", "3", "+"], &constants).unwrap(), 5);
        assert_eq!(evaluate(&["5", "3", "-"], &constants).unwrap(), 2);
        assert_eq!(evaluate(&["3", "5", "-"], &constants).unwrap(), -2);
    }

    #[test]
    fn test_evaluate_with_constants() {
        let constants: ConstantTable = [("x", 10_i64), ("y", -5)].into_iter().collect();
        assert_eq!(evaluate(&["x", "y", "+", "abs"], &constants).unwrap(), 5);
        assert_eq!(evaluate(&["x", "1", "+"], &constants).unwrap(), 11);
    }

    #[test]
    fn test_evaluate_errors() {
        let constants = no_constants();
        assert_eq!(
            evaluate(&["x"], &constants).unwrap_err(),
            Error::UnrecognizedToken { token: "x".to_string() }
        );
        assert!(matches!(
            evaluate(&["2", "+"], &constants),
            Err(Error::InsufficientOperands { needed: 2, available: 1, .. })
        ));
        assert!(matches!(
            evaluate(&["abs"], &constants),
            Err(Error::InsufficientOperands { needed: 1, available: 0, .. })
        ));
        let empty: [&str; 0] = [];
        assert_eq!(
            evaluate(&empty, &constants).unwrap_err(),
            Error::MalformedExpression { remaining: 0 }
        );
        assert_eq!(
            evaluate(&["1", "2"], &constants).unwrap_err(),
            Error::MalformedExpression { remaining: 2 }
        );
    }

    #[test]
    fn test_constants_shadow_operators() {
        let constants: ConstantTable = [("abs", 3_i64), ("-", 4)].into_iter().collect();
        assert_eq!(evaluate(&["abs"], &constants).unwrap(), 3);
        assert_eq!(evaluate(&["abs", "-", "+"], &constants).unwrap(), 7);
        assert_eq!(evaluate(&["-10", "abs", "+"], &constants).unwrap(), -7);
    }

    #[test]
    fn test_literals_are_never_shadowed() {
        let constants: ConstantTable = [("5", 100_i64), ("-1", 100)].into_iter().collect();
        assert_eq!(evaluate(&["5"], &constants).unwrap(), 5);
        assert_eq!(evaluate(&["5", "-1", "+"], &constants).unwrap(), 4);
    }

    #[test]
    fn test_lone_fence_is_an_empty_expression() {
        let constants = no_constants();
        assert_eq!(
            evaluate_source("|", &constants).unwrap_err(),
            Error::MalformedExpression { remaining: 0 }
        );
    }

    #[test]
    fn test_blank_tokens_are_skipped() {
        let constants = no_constants();
        assert_eq!(evaluate(&["", "4", " ", "abs"], &constants).unwrap(), 4);
    }

    #[test]
    fn test_overflow_is_reported() {
        let constants: ConstantTable = [("max", i64::MAX), ("min", i64::MIN)].into_iter().collect();
        assert!(matches!(
            evaluate(&["max", "1", "+"], &constants),
            Err(Error::ArithmeticOverflow { .. })
        ));
        assert!(matches!(
            evaluate(&["min", "abs"], &constants),
            Err(Error::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_evaluate_source_strips_fence() {
        let constants: ConstantTable = [("size", 42_i64)].into_iter().collect();
        assert_eq!(evaluate_source("|size 1 +|", &constants).unwrap(), 43);
        assert_eq!(evaluate_source("  |size  -2 -|\n", &constants).unwrap(), 44);
    }
}
