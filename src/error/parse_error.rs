use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant except [`ParseError::InputTooLong`] records the byte offset
/// of the offending lexeme or token in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input exceeded the maximum accepted length.
    #[error("Input string too long")]
    InputTooLong {
        /// The length of the input in characters.
        length: usize,
        /// The maximum accepted length in characters.
        limit:  usize,
    },
    /// A character that cannot start any token.
    #[error("Unknown character: {character}")]
    UnknownCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A lone `<` or `>` that is not part of a shift operator.
    #[error("Unexpected character: {character}")]
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A numeric literal that is not well formed, e.g. `2.` or `1e+`.
    #[error("Invalid number format: {literal}")]
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A numeric literal whose value does not fit in an `f64`.
    #[error("Number out of range: {literal}")]
    NumberOutOfRange {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A numeric literal longer than the lexeme limit.
    #[error("Number too long")]
    NumberTooLong {
        /// Byte offset of the literal.
        position: usize,
    },
    /// An identifier longer than the lexeme limit.
    #[error("Identifier too long")]
    IdentifierTooLong {
        /// Byte offset of the identifier.
        position: usize,
    },
    /// An identifier used outside of function-call syntax.
    #[error("Unknown identifier: {name}")]
    UnknownIdentifier {
        /// The identifier.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// Found a token that cannot start an operand.
    #[error("Unexpected token: {token}")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input where an operand was expected.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Unexpected token after expression")]
    UnexpectedTrailingToken {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected after a grouped expression.
    #[error("Expected ')'")]
    ExpectedClosingParen {
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// A closing parenthesis `)` was expected after a function argument.
    #[error("Expected ')' after function argument")]
    ExpectedClosingParenAfterArgument {
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// Parentheses, prefix operators or powers nested beyond the limit.
    #[error("Expression nested too deeply")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Byte offset of the token that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at, if it has one.
    ///
    /// ## Example
    /// ```
    /// use reckon::error::ParseError;
    ///
    /// let err = ParseError::UnknownCharacter { character: '$',
    ///                                          position:  4, };
    /// assert_eq!(err.position(), Some(4));
    /// assert_eq!(err.to_string(), "Unknown character: $");
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InputTooLong { .. } => None,
            Self::UnknownCharacter { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::NumberOutOfRange { position, .. }
            | Self::NumberTooLong { position }
            | Self::IdentifierTooLong { position }
            | Self::UnknownIdentifier { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedTrailingToken { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedClosingParenAfterArgument { position }
            | Self::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}
