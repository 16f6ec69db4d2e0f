use logos::Logos;
use tracing::debug;

use crate::error::ParseError;

/// Maximum accepted input length, in characters.
pub const MAX_INPUT_LENGTH: usize = 10_000;
/// Maximum length of a single number or identifier lexeme.
pub const MAX_LEXEME_LENGTH: usize = 100;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// `End` is never matched from text; [`Lexer::tokenize`] appends exactly one.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `2` or `2.1e-10`, and the
    /// constants `pi`/`PI` and `e`/`E`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?", parse_number)]
    #[token("pi", |_| std::f64::consts::PI)]
    #[token("PI", |_| std::f64::consts::PI)]
    #[token("e", |_| std::f64::consts::E, priority = 3)]
    #[token("E", |_| std::f64::consts::E, priority = 3)]
    Number(f64),
    /// Identifier tokens; function names such as `sin` or `factorial`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", parse_identifier)]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Modulo,
    /// `^` or `**`
    #[token("^")]
    #[token("**")]
    Power,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `AND`
    #[token("AND")]
    BitwiseAnd,
    /// `OR`
    #[token("OR")]
    BitwiseOr,
    /// `XOR`
    #[token("XOR")]
    BitwiseXor,
    /// `NOT`
    #[token("NOT")]
    BitwiseNot,
    /// `<<`
    #[token("<<")]
    LeftShift,
    /// `>>`
    #[token(">>")]
    RightShift,
    /// End of input.
    End,
}

/// The tag of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Power,
    LParen,
    RParen,
    Comma,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    LeftShift,
    RightShift,
    End,
}

impl Token {
    /// Returns the tag of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::Modulo => TokenKind::Modulo,
            Self::Power => TokenKind::Power,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Comma => TokenKind::Comma,
            Self::BitwiseAnd => TokenKind::BitwiseAnd,
            Self::BitwiseOr => TokenKind::BitwiseOr,
            Self::BitwiseXor => TokenKind::BitwiseXor,
            Self::BitwiseNot => TokenKind::BitwiseNot,
            Self::LeftShift => TokenKind::LeftShift,
            Self::RightShift => TokenKind::RightShift,
            Self::End => TokenKind::End,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Number(value) => return write!(f, "{value}"),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::BitwiseAnd => "AND",
            Self::BitwiseOr => "OR",
            Self::BitwiseXor => "XOR",
            Self::BitwiseNot => "NOT",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::End => "end of input",
        };
        write!(f, "{symbol}")
    }
}

/// Failure reported by a lexeme callback.
///
/// The lexer driver turns it into a [`ParseError`] once the position and the
/// offending slice are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token pattern matched.
    #[default]
    Unrecognized,
    /// A number lexeme longer than [`MAX_LEXEME_LENGTH`].
    NumberTooLong,
    /// A number lexeme with a dangling `.`, exponent marker or sign.
    InvalidNumber,
    /// A number lexeme whose value is infinite or NaN.
    NumberOutOfRange,
    /// An identifier lexeme longer than [`MAX_LEXEME_LENGTH`].
    IdentifierTooLong,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed, finite value.
/// - `Err(LexError)`: If the literal is too long, malformed, or overflows.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let literal = lex.slice();
    if literal.len() > MAX_LEXEME_LENGTH {
        return Err(LexError::NumberTooLong);
    }
    if literal.ends_with(['.', 'e', 'E', '+', '-']) {
        return Err(LexError::InvalidNumber);
    }

    let value: f64 = literal.parse().map_err(|_| LexError::InvalidNumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexError::NumberOutOfRange)
    }
}

/// Parses an identifier from the current token slice.
///
/// Keywords and constants never reach this callback; their exact `token`
/// patterns take priority over the identifier pattern.
fn parse_identifier(lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    let name = lex.slice();
    if name.len() > MAX_LEXEME_LENGTH {
        return Err(LexError::IdentifierTooLong);
    }
    Ok(name.to_string())
}

/// Converts an input string into a sequence of positioned tokens.
///
/// A `Lexer` is built for a single expression and consumed by
/// [`Lexer::tokenize`].
///
/// ## Example
/// ```
/// use reckon::interpreter::lexer::{Lexer, Token};
///
/// let tokens = Lexer::new("2 ** 3").unwrap().tokenize().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Power, 2),
///                 (Token::Number(3.0), 5),
///                 (Token::End, 6)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`.
    ///
    /// # Errors
    /// Returns [`ParseError::InputTooLong`] if the input has more than
    /// [`MAX_INPUT_LENGTH`] characters.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let length = input.chars().count();
        if length > MAX_INPUT_LENGTH {
            return Err(ParseError::InputTooLong { length,
                                                  limit: MAX_INPUT_LENGTH });
        }
        Ok(Self { input })
    }

    /// Tokenizes the whole input.
    ///
    /// Each token is paired with the byte offset of its first character. The
    /// sequence always ends with exactly one [`Token::End`], positioned at the
    /// end of the input.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first malformed lexeme. No
    /// partial token sequence is returned.
    pub fn tokenize(self) -> Result<Vec<(Token, usize)>, ParseError> {
        let mut tokens = Vec::new();
        let mut lexer = Token::lexer(self.input);

        while let Some(result) = lexer.next() {
            let position = lexer.span().start;
            match result {
                Ok(token) => tokens.push((token, position)),
                Err(error) => return Err(self.lex_error(error, lexer.slice(), position)),
            }
        }

        tokens.push((Token::End, self.input.len()));
        debug!(count = tokens.len(), "tokenized expression");
        Ok(tokens)
    }

    /// Builds the diagnostic for a failed lexeme starting at `position`.
    fn lex_error(&self, error: LexError, slice: &str, position: usize) -> ParseError {
        match error {
            LexError::Unrecognized => {
                let character = self.input
                                    .get(position..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or_default();
                if matches!(character, '<' | '>') {
                    ParseError::UnexpectedCharacter { character, position }
                } else {
                    ParseError::UnknownCharacter { character, position }
                }
            },
            LexError::NumberTooLong => ParseError::NumberTooLong { position },
            LexError::InvalidNumber => ParseError::InvalidNumber { literal: slice.to_string(),
                                                                   position },
            LexError::NumberOutOfRange => {
                ParseError::NumberOutOfRange { literal: slice.to_string(),
                                               position }
            },
            LexError::IdentifierTooLong => ParseError::IdentifierTooLong { position },
        }
    }
}
