//! Lexical error types.
//!
//! Every error is fatal to the lexing attempt that produced it. Each variant
//! records the [`Position`] where the offending lexeme starts.

use thiserror::Error;

use crate::token::{Position, Token};

/// Error type for lexing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No tokenizer handles the character under the cursor.
    #[error("unrecognized character {ch:?} at {position}")]
    UnrecognizedCharacter {
        /// The offending character.
        ch: char,
        /// Where it occurs.
        position: Position,
    },

    /// A candidate numeral did not end in an accepting state.
    #[error("invalid numeric literal '{text}' at {position}")]
    InvalidNumericLiteral {
        /// The full candidate text that was scanned and discarded.
        text: String,
        /// Where the candidate starts.
        position: Position,
    },

    /// End of input was reached before the closing quote.
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString {
        /// The literal from its opening quote to the end of input.
        text: String,
        /// Where the opening quote is.
        position: Position,
    },

    /// An operator character with no defined single or paired form.
    #[error("unrecognized operator '{ch}' at {position}")]
    UnrecognizedOperator {
        /// The offending operator character.
        ch: char,
        /// Where it occurs.
        position: Position,
    },
}

impl LexError {
    /// Where the offending lexeme starts.
    pub fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::InvalidNumericLiteral { position, .. }
            | Self::UnterminatedString { position, .. }
            | Self::UnrecognizedOperator { position, .. } => *position,
        }
    }

    /// Number of characters the offending lexeme spans.
    pub fn lexeme_len(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { .. } | Self::UnrecognizedOperator { .. } => 1,
            Self::InvalidNumericLiteral { text, .. } | Self::UnterminatedString { text, .. } => {
                text.chars().count()
            },
        }
    }

    /// A short, stable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter { .. } => "unrecognized_character",
            Self::InvalidNumericLiteral { .. } => "invalid_numeric_literal",
            Self::UnterminatedString { .. } => "unterminated_string",
            Self::UnrecognizedOperator { .. } => "unrecognized_operator",
        }
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Error returned by [`Lexer::tokenize`](crate::Lexer::tokenize).
///
/// Carries the first lexical error together with the tokens read before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct TokenizeError<'src> {
    /// Tokens produced before the error, in source order.
    pub tokens: Vec<Token<'src>>,
    /// The error that stopped tokenization.
    #[source]
    pub error: LexError,
}

impl TokenizeError<'_> {
    /// Where the offending lexeme starts.
    pub fn position(&self) -> Position {
        self.error.position()
    }

    /// Discards the partial tokens.
    pub fn into_error(self) -> LexError {
        self.error
    }
}

impl From<TokenizeError<'_>> for LexError {
    fn from(err: TokenizeError<'_>) -> Self {
        err.error
    }
}
