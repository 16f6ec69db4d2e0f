//! # reckon
//!
//! reckon is the expression core of a calculator: a lexer, a recursive-descent
//! parser and a checked tree-walking evaluator over `f64`, with 64-bit integer
//! bitwise operators.
//!
//! Every call is independent. The only entry point most callers need is
//! [`evaluate`], which returns a finite number or a [`CalcError`] tagged as a
//! parse or evaluation failure.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::core::Evaluator, lexer::Lexer, parser::core::Parser};
pub use crate::{
    ast::Expr,
    error::{CalcError, ErrorKind, EvalError, ParseError},
    interpreter::evaluator::function::core::BUILTIN_FUNCTIONS,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the node shapes and operator tags.
/// - Renders trees in fully parenthesised form for inspection.
pub mod ast;
/// Provides the error taxonomy for parsing and evaluation.
///
/// Every failure is either a `ParseError` (the text is not a well-formed
/// expression) or an `EvalError` (the expression is well-formed but cannot be
/// computed). `CalcError` unifies the two for the public entry points.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders the user-facing message of each failure.
/// - Attaches byte offsets to parse errors where one is known.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `f64` and integer types without silent data loss.
pub mod util;

/// Parses an expression into its syntax tree without evaluating it.
///
/// # Examples
/// ```
/// let ast = reckon::parse("2 + 3 * 4").unwrap();
/// assert_eq!(ast.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(expression: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::new(expression)?.tokenize()?;
    Parser::new(tokens).parse()
}

/// Evaluates an arithmetic expression and returns its value.
///
/// The expression is tokenized, parsed and evaluated in a single call. The
/// result is always finite.
///
/// # Errors
/// Returns [`CalcError::Parse`] if the text is not a well-formed expression,
/// and [`CalcError::Eval`] if it cannot be computed (division by zero,
/// overflow, a domain violation, an unknown function, ...).
///
/// # Examples
/// ```
/// use reckon::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate("sqrt(16) + 5 AND 3").unwrap(), 1.0);
///
/// let err = evaluate("1 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Eval);
/// assert_eq!(err.message(), "Division by zero");
///
/// let err = evaluate("(2 + 3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Parse);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    let result = parse(expression).map_err(CalcError::from)
                                  .and_then(|ast| {
                                      Evaluator::new().eval(&ast).map_err(CalcError::from)
                                  });

    if let Err(e) = &result {
        debug!(kind = %e.kind(), error = %e, "evaluation failed");
    }

    result
}
