use miette::Diagnostic;
use thiserror::Error;

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a translation run can hit. All of them abort the run.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Constant declared without a name")]
    #[diagnostic(
        code(confml::missing_constant_name),
        help("add a non-empty `name` attribute to the <const> element")
    )]
    MissingConstantName,

    #[error("Unrecognized token in expression: {token}")]
    #[diagnostic(code(confml::unrecognized_token))]
    UnrecognizedToken { token: String },

    #[error("Not enough operands for `{operator}`: needs {needed}, stack holds {available}")]
    #[diagnostic(code(confml::insufficient_operands))]
    InsufficientOperands {
        operator: String,
        needed: usize,
        available: usize,
    },

    #[error("Expression did not reduce to a single value ({remaining} left on the stack)")]
    #[diagnostic(code(confml::malformed_expression))]
    MalformedExpression { remaining: usize },

    #[error("Unknown comment type: {}", .kind.as_deref().unwrap_or("<missing>"))]
    #[diagnostic(
        code(confml::unknown_comment_type),
        help("comments take type=\"line\" or type=\"multi\"")
    )]
    UnknownCommentType { kind: Option<String> },

    #[error("Unknown tag: {tag}")]
    #[diagnostic(code(confml::unknown_tag))]
    UnknownTag { tag: String },

    #[error("Failed to read input: {message}")]
    #[diagnostic(code(confml::input_unreadable))]
    InputUnreadable { message: String },

    #[error("Constant `{name}` holds text and cannot be used in an expression")]
    #[diagnostic(code(confml::non_numeric_constant))]
    NonNumericConstant { name: String },

    #[error("Integer literal out of range: {literal}")]
    #[diagnostic(code(confml::integer_out_of_range))]
    IntegerOutOfRange { literal: String },

    #[error("Arithmetic overflow while applying `{operator}`")]
    #[diagnostic(code(confml::arithmetic_overflow))]
    ArithmeticOverflow { operator: String },

    #[error("Constant `{name}` is already defined")]
    #[diagnostic(
        code(confml::constant_redeclared),
        help("drop --strict-constants to let the last definition win")
    )]
    ConstantRedeclared { name: String },

    #[error("Failed to write output: {message}")]
    #[diagnostic(code(confml::output_error))]
    Output { message: String },
}

impl Error {
    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Error::InputUnreadable {
            message: message.into(),
        }
    }

    pub(crate) fn insufficient(operator: &str, needed: usize, available: usize) -> Self {
        Error::InsufficientOperands {
            operator: operator.to_string(),
            needed,
            available,
        }
    }

    pub(crate) fn overflow(operator: &str) -> Self {
        Error::ArithmeticOverflow {
            operator: operator.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::input(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::input(format!("malformed XML: {}", err))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::input(format!("malformed attribute: {}", err))
    }
}
