use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_bitwise_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of parentheses, function calls, prefix operators and
/// right-hand powers.
///
/// Parsing and evaluating an expression at this depth fits in the 2 MiB stack
/// of a spawned thread.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Builds an AST from the token sequence of one expression.
///
/// The grammar, from lowest to highest precedence:
/// ```text
///     expression := bitwiseOr
///     bitwiseOr  := bitwiseXor ( "OR"  bitwiseXor )*
///     bitwiseXor := bitwiseAnd ( "XOR" bitwiseAnd )*
///     bitwiseAnd := shift      ( "AND" shift )*
///     shift      := term       ( ("<<" | ">>") term )*
///     term       := factor     ( ("+" | "-") factor )*
///     factor     := power      ( ("*" | "/" | "%") power )*
///     power      := unary ( "^" power )?
///     unary      := ("+" | "-" | "NOT") unary | primary
///     primary    := NUMBER | IDENTIFIER "(" expression ")" | "(" expression ")"
/// ```
///
/// ## Example
/// ```
/// use reckon::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let tokens = Lexer::new("2 ^ 3 ^ 2").unwrap().tokenize().unwrap();
/// let ast = Parser::new(tokens).parse().unwrap();
///
/// assert_eq!(ast.to_string(), "(2 ^ (3 ^ 2))");
/// assert_eq!(ast.evaluate().unwrap(), 512.0);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<(Token, usize)>,
}

impl Parser {
    /// Creates a parser that owns the token sequence.
    #[must_use]
    pub const fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self { tokens }
    }

    /// Parses the tokens into a single expression tree.
    ///
    /// The expression must be followed by [`Token::End`]; anything else is
    /// reported as a trailing token.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(self) -> ParseResult<Expr> {
        let mut tokens = self.tokens.iter().peekable();
        let expr = parse_expression(&mut tokens, 0)?;

        match tokens.peek() {
            Some((Token::End, _)) | None => {
                debug!(tree = %expr, "parsed expression");
                Ok(expr)
            },
            Some((token, position)) => {
                Err(ParseError::UnexpectedTrailingToken { token:    token.to_string(),
                                                          position: *position, })
            },
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, bitwise OR, and recursively descends through the
/// precedence hierarchy.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting depth, checked against [`MAX_NESTING_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_bitwise_or(tokens, depth)
}

/// Returns the position of the next token, or `0` when the stream is
/// exhausted.
pub(in crate::interpreter::parser) fn next_position<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, position)| *position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Lexer;

    fn parse(input: &str) -> ParseResult<Expr> {
        Parser::new(Lexer::new(input)?.tokenize()?).parse()
    }

    fn tree(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(tree("2 + 3 * 4"), "(2 + (3 * 4))");
        assert_eq!(tree("2 * 3 + 4"), "((2 * 3) + 4)");
        assert_eq!(tree("(2 + 3) * 4"), "((2 + 3) * 4)");
    }

    #[test]
    fn left_associative_levels() {
        assert_eq!(tree("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(tree("8 / 4 % 3"), "((8 / 4) % 3)");
        assert_eq!(tree("1 << 2 >> 1"), "((1 << 2) >> 1)");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(tree("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
        assert_eq!(tree("2 ** 3 ** 2"), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn prefix_operators_bind_tighter_than_power() {
        assert_eq!(tree("-2 ^ 2"), "((-2) ^ 2)");
        assert_eq!(tree("2 ^ -1"), "(2 ^ (-1))");
        assert_eq!(tree("-(-5)"), "(-(-5))");
        assert_eq!(tree("NOT 0 + 1"), "((NOT 0) + 1)");
    }

    #[test]
    fn bitwise_precedence_ladder() {
        assert_eq!(tree("1 OR 2 XOR 3 AND 4 << 1 + 2"),
                   "(1 OR (2 XOR (3 AND (4 << (1 + 2)))))");
    }

    #[test]
    fn function_calls_nest() {
        assert_eq!(tree("sin(cos(0))"), "sin(cos(0))");
        assert_eq!(tree("2 * sqrt(16) + 1"), "((2 * sqrt(16)) + 1)");
    }

    #[test]
    fn no_wrapper_for_missing_operators() {
        assert_eq!(parse("42").unwrap(), Expr::Number { value: 42.0 });
        assert_eq!(parse("((42))").unwrap(), Expr::Number { value: 42.0 });
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse("2 3").unwrap_err(),
                   ParseError::UnexpectedTrailingToken { token:    "3".to_string(),
                                                         position: 2, });
        assert_eq!(parse("2 + 3)").unwrap_err().to_string(),
                   "Unexpected token after expression");
    }

    #[test]
    fn missing_closing_paren_is_strict() {
        assert_eq!(parse("(2 + 3").unwrap_err(),
                   ParseError::ExpectedClosingParen { position: 6 });
        assert_eq!(parse("sqrt(4").unwrap_err(),
                   ParseError::ExpectedClosingParenAfterArgument { position: 6 });
    }

    #[test]
    fn premature_end_and_stray_tokens() {
        assert_eq!(parse("2 +").unwrap_err(),
                   ParseError::UnexpectedEndOfInput { position: 3 });
        assert_eq!(parse("2 + * 3").unwrap_err(),
                   ParseError::UnexpectedToken { token:    "*".to_string(),
                                                 position: 4, });
        assert_eq!(parse("").unwrap_err().to_string(), "Unexpected end of input");
    }

    #[test]
    fn identifiers_require_call_syntax() {
        assert_eq!(parse("x + 1").unwrap_err(),
                   ParseError::UnknownIdentifier { name:     "x".to_string(),
                                                   position: 0, });
    }

    #[test]
    fn multiple_arguments_are_rejected() {
        assert!(matches!(parse("max(1, 2)").unwrap_err(),
                         ParseError::ExpectedClosingParenAfterArgument { position: 5 }));
    }

    #[test]
    fn nesting_limit() {
        let ok = format!("{}1{}", "(".repeat(129), ")".repeat(129));
        assert!(parse(&ok).is_ok());

        let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        assert!(matches!(parse(&deep).unwrap_err(),
                         ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. }));

        let negations = format!("{}1", "-".repeat(300));
        assert!(matches!(parse(&negations).unwrap_err(),
                         ParseError::NestingTooDeep { .. }));
    }

    #[test]
    fn nesting_at_the_limit_fits_a_spawned_thread() {
        let handle = std::thread::spawn(|| {
            let parens = format!("{}1{}",
                                 "(".repeat(MAX_NESTING_DEPTH),
                                 ")".repeat(MAX_NESTING_DEPTH));
            let calls = format!("{}0{}", "abs(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
            (parse(&parens).map(|expr| expr.evaluate()), parse(&calls).map(|expr| expr.evaluate()))
        });
        let (parens, calls) = handle.join().unwrap();
        assert_eq!(parens, Ok(Ok(1.0)));
        assert_eq!(calls, Ok(Ok(0.0)));
    }
}
