/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unknown characters, malformed or oversized
/// literals, unbalanced parentheses, trailing tokens and premature end of
/// input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the tree.
/// Evaluation errors include division by zero, domain violations of builtin
/// functions, overflow and out-of-range bitwise operands.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
use thiserror::Error;

/// The coarse category of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input at the lexical or grammatical level.
    Parse,
    /// Malformed input at the semantic level.
    Eval,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => write!(f, "ParseError"),
            Self::Eval => write!(f, "EvalError"),
        }
    }
}

/// Any failure of [`crate::evaluate`].
///
/// The first failure aborts the whole pipeline and is surfaced unchanged; the
/// rendered message is exactly the message of the wrapped error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Returns whether the failure happened while parsing or while evaluating.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Eval(_) => ErrorKind::Eval,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
