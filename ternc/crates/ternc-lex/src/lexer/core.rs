//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, category dispatch, and the
//! eager, iterator and error-recovering front ends built on `next_token`.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::classify::{classify, CharCategory};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult, TokenizeError};
use crate::token::{Token, TokenKind};

/// Lexer for the Tern programming language.
///
/// The lexer owns a [`Cursor`] over one source buffer. Its only state is
/// the cursor's position, so each [`next_token`](Self::next_token) call
/// depends on nothing but where the previous one stopped.
///
/// # Example
///
/// ```
/// use ternc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x <- 42");
/// let kinds: Vec<TokenKind> = lexer
///     .tokenize()
///     .unwrap()
///     .iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [TokenKind::Let, TokenKind::Identifier, TokenKind::LeftArrow, TokenKind::Integer]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips plain spaces, classifies the character under the cursor and
    /// hands it to the tokenizer for its category. Once the input is
    /// exhausted this returns [`TokenKind::EndOfInput`] on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the lexeme at the cursor is malformed. The
    /// cursor is left at the start of that lexeme.
    pub fn next_token(&mut self) -> LexResult<Token<'a>> {
        if self.cursor.is_at_end() {
            return Ok(Token::end_of_input());
        }

        self.cursor.skip_whitespace();

        let Some(current) = self.cursor.current_char() else {
            return Ok(Token::end_of_input());
        };

        let category = classify(current);
        trace!(?category, line = self.line(), column = self.column(), "dispatch");

        let result = match category {
            CharCategory::Delimiter => self.lex_delimiter(current),
            CharCategory::ZeroDigit | CharCategory::PositiveDigit => self.lex_number(),
            CharCategory::Dot | CharCategory::Operator => self.lex_operator(current),
            CharCategory::DoubleQuote => self.lex_string(),
            CharCategory::Letter | CharCategory::Underscore => Ok(self.lex_identifier()),
            CharCategory::Newline => Ok(self.lex_newline()),
            CharCategory::EscapeCharacter | CharCategory::Unrecognized => {
                Err(self.unrecognized_character(current))
            },
        };

        if let Err(err) = &result {
            debug!(code = err.code(), %err, "lexical error");
        }
        result
    }

    /// Tokenizes the whole input.
    ///
    /// The returned tokens do not include the end-of-input sentinel.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed lexeme. The returned [`TokenizeError`]
    /// holds that error and the tokens produced before it.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, TokenizeError<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = match self.next_token() {
                Ok(token) => token,
                Err(error) => return Err(TokenizeError { tokens, error }),
            };
            if token.is_end_of_input() {
                break;
            }
            tokens.push(token);
        }
        debug!(tokens = tokens.len(), lines = self.line() + 1, "tokenized source");
        Ok(tokens)
    }

    /// Tokenizes the whole input without stopping at errors.
    ///
    /// Each malformed lexeme becomes a [`TokenKind::Unrecognized`] token
    /// spanning the offending text, and its error is collected. No input is
    /// skipped silently: the lexemes of the returned tokens cover the
    /// source except for the spaces between them.
    pub fn tokenize_recovering(&mut self) -> Recovered<'a> {
        let mut recovered = Recovered::default();
        loop {
            match self.next_token() {
                Ok(token) if token.is_end_of_input() => break,
                Ok(token) => recovered.tokens.push(token),
                Err(err) => {
                    recovered.tokens.push(self.skip_erroneous(&err));
                    recovered.errors.push(err);
                },
            }
        }
        debug!(
            tokens = recovered.tokens.len(),
            errors = recovered.errors.len(),
            "tokenized source with recovery"
        );
        recovered
    }

    /// Consumes the lexeme an error was reported for.
    fn skip_erroneous(&mut self, err: &LexError) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance_n(err.lexeme_len().max(1));
        Token::new(
            TokenKind::Unrecognized,
            self.cursor.slice_from(start),
            err.position(),
        )
    }

    pub(crate) fn unrecognized_character(&self, ch: char) -> LexError {
        LexError::UnrecognizedCharacter {
            ch,
            position: self.cursor.location(),
        }
    }

    /// Returns the current line number (0-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Output of [`Lexer::tokenize_recovering`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recovered<'a> {
    /// All tokens, with [`TokenKind::Unrecognized`] in place of bad lexemes.
    pub tokens: Vec<Token<'a>>,
    /// The errors, in source order.
    pub errors: Vec<LexError>,
}

impl Recovered<'_> {
    /// Returns true if no errors were found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Iterator over the tokens of a [`Lexer`].
///
/// Yields `Ok` tokens until the end of input, or a single `Err` after
/// which it is exhausted. The end-of-input sentinel is not yielded.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    finished: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.lexer.next_token() {
            Ok(token) if token.is_end_of_input() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl FusedIterator for Tokens<'_> {}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Tokens {
            lexer: self,
            finished: false,
        }
    }
}
