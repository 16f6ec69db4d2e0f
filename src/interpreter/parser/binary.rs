use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Repeatedly parses `operand`, folding each operator accepted by `accepts`
/// into a `BinaryOp` whose left child is everything parsed so far.
///
/// Grammar: `level := operand (op operand)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth, passed through unchanged.
/// - `operand`: Parser for the next-higher precedence level.
/// - `accepts`: Selects the operators that belong to this level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 accepts: impl Fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = operand(tokens, depth)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            tokens.next();
            let right = operand(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise OR expressions, the lowest precedence level.
///
/// Grammar: `bitwise_or := bitwise_xor ("OR" bitwise_xor)*`
pub fn parse_bitwise_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, depth, parse_bitwise_xor, |op| {
        matches!(op, BinaryOperator::BitwiseOr)
    })
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitwise_xor := bitwise_and ("XOR" bitwise_and)*`
pub fn parse_bitwise_xor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, depth, parse_bitwise_and, |op| {
        matches!(op, BinaryOperator::BitwiseXor)
    })
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitwise_and := shift ("AND" shift)*`
pub fn parse_bitwise_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, depth, parse_shift, |op| {
        matches!(op, BinaryOperator::BitwiseAnd)
    })
}

/// Parses shift expressions.
///
/// Grammar: `shift := term (("<<" | ">>") term)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, depth, parse_term, |op| {
        matches!(op, BinaryOperator::LeftShift | BinaryOperator::RightShift)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, depth, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Subtract)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `factor := power (("*" | "/" | "%") power)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, depth, parse_power, |op| {
        matches!(op,
                 BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo)
    })
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: the right-hand side recurses into
/// this function instead of looping, so `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// Grammar: `power := unary ("^" power)?`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, depth)?;

    if let Some((Token::Power, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_power(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Power,
                                   right: Box::new(exponent), });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that never act as binary operators. `+` and `-`
/// map to `Add` and `Subtract`; their prefix use is handled by the unary
/// parser before this mapping is consulted.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::LeftShift),
///            Some(BinaryOperator::LeftShift));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Multiply => Some(BinaryOperator::Multiply),
        Token::Divide => Some(BinaryOperator::Divide),
        Token::Modulo => Some(BinaryOperator::Modulo),
        Token::Power => Some(BinaryOperator::Power),
        Token::BitwiseAnd => Some(BinaryOperator::BitwiseAnd),
        Token::BitwiseOr => Some(BinaryOperator::BitwiseOr),
        Token::BitwiseXor => Some(BinaryOperator::BitwiseXor),
        Token::LeftShift => Some(BinaryOperator::LeftShift),
        Token::RightShift => Some(BinaryOperator::RightShift),
        _ => None,
    }
}
