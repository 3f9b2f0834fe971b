//! Postfix expression evaluation
//!
//! Expressions are reverse Polish token sequences over integers, previously
//! declared constants and the operators `+`, `-` and `abs`.

pub mod constants;
pub mod evaluator;
pub mod tokens;

pub use constants::{ConstantTable, ConstantValue, RedeclarationPolicy};
pub use evaluator::{evaluate, evaluate_source};
pub use tokens::{tokenize, Operator, Token};
