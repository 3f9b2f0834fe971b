//! confml-rs: translator from XML configuration markup to a list-based
//! configuration dialect
//!
//! The markup declares integer constants, arrays, values, strings and
//! comments; values may embed postfix expressions over earlier constants:
//!
//! ```xml
//! <config>
//!     <const name="size">42</const>
//!     <const name="offset"><expr>|size 1 +|</expr></const>
//!     <array><value>1</value><value><string>two</string></value></array>
//! </config>
//! ```
//!
//! translates to
//!
//! ```text
//! const size = 42
//! const offset = 43
//! '( 1 [[two]] )
//! ```

pub mod ast;
pub mod cli;
pub mod compiler;
pub mod error;
pub mod expr;
pub mod markup;
pub mod translator;

pub use compiler::{compile, compile_element};
pub use error::{Error as TranslateError, Result as TranslateResult};
pub use translator::{TranslateOptions, Translation, Translator};

// Re-export commonly used types
pub use ast::{Body, CommentKind, Literal, Node};
pub use expr::{evaluate, ConstantTable, ConstantValue, RedeclarationPolicy};
pub use markup::Element;
