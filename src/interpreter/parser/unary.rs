use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, next_position, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`   (identity)
/// - `-`   (numeric negation)
/// - `NOT` (bitwise complement)
///
/// Unary operators are right-associative, so an input like `-NOT x` is parsed
/// as `-(NOT x)`. Each prefix adds one level of nesting.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "NOT") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Errors
/// Returns [`ParseError::NestingTooDeep`] once `depth` exceeds
/// [`MAX_NESTING_DEPTH`], and propagates errors from [`parse_primary`].
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                position: next_position(tokens), });
    }

    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        Some((Token::BitwiseNot, _)) => UnaryOperator::BitwiseNot,
        _ => return parse_primary(tokens, depth),
    };

    tokens.next();
    let expr = parse_unary(tokens, depth + 1)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr) })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER "(" expression ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream is at [`Token::End`].
/// - `UnexpectedToken` for any other token that cannot start an operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, position) = tokens.peek()
                                  .copied()
                                  .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value })
        },
        Token::Identifier(_) => parse_function_call(tokens, depth),
        Token::LParen => parse_grouping(tokens, depth),
        Token::End => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        token => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                   position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The closing parenthesis is mandatory, including at end of input.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(expr)
        },
        _ => Err(ParseError::ExpectedClosingParen { position: next_position(tokens) }),
    }
}

/// Parses a function call.
///
/// Identifiers are only valid as function names, so the identifier must be
/// followed by a parenthesized single argument.
///
/// Grammar: `call := IDENTIFIER "(" expression ")"`
///
/// # Errors
/// - `UnknownIdentifier` if the identifier is not followed by `(`.
/// - `ExpectedClosingParenAfterArgument` if the argument is not followed by
///   `)`.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(name), position)) => (name.clone(), *position),
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };

    if !matches!(tokens.peek(), Some((Token::LParen, _))) {
        return Err(ParseError::UnknownIdentifier { name, position });
    }
    tokens.next();

    let argument = parse_expression(tokens, depth + 1)?;
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(Expr::FunctionCall { name,
                                    argument: Box::new(argument) })
        },
        _ => Err(ParseError::ExpectedClosingParenAfterArgument { position:
                                                                     next_position(tokens) }),
    }
}
