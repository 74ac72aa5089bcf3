//! Operator lexing.
//!
//! Operators are resolved greedily with exactly one character of lookahead:
//! the current character and the next one are combined when the pair is an
//! operator of its own, otherwise the current character stands alone. No
//! operator is longer than two characters.
//!
//! Handles:
//! - Pairs: `+= -= *= /= %= <= >= == != <- -> && ||`
//! - Singles: `= + - * / % < > !`
//! - `.`, which starts a decimal literal when a digit follows

use crate::classify::is_digit;
use crate::error::{LexError, LexResult};
use crate::token::{operator_from_str, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the operator starting with `current`.
    ///
    /// # Errors
    ///
    /// [`LexError::UnrecognizedOperator`] for a `&` or `|` that is not
    /// doubled, or any operator character with no single or paired form.
    pub(crate) fn lex_operator(&mut self, current: char) -> LexResult<Token<'a>> {
        let next = self.cursor.peek_char(1);

        if current == '.' {
            if next.is_some_and(is_digit) {
                return self.lex_number();
            }
            return Ok(self.consume_operator(TokenKind::Dot, 1));
        }

        if let Some(next) = next {
            let pair_len = current.len_utf8() + next.len_utf8();
            if let Some(kind) = operator_from_str(&self.cursor.remaining()[..pair_len]) {
                return Ok(self.consume_operator(kind, 2));
            }
        }

        match operator_from_str(&self.cursor.remaining()[..current.len_utf8()]) {
            Some(kind) => Ok(self.consume_operator(kind, 1)),
            None => Err(LexError::UnrecognizedOperator {
                ch: current,
                position: self.cursor.location(),
            }),
        }
    }

    fn consume_operator(&mut self, kind: TokenKind, width: usize) -> Token<'a> {
        let position = self.cursor.location();
        let start = self.cursor.position();
        self.cursor.advance_n(width);
        Token::new(kind, self.cursor.slice_from(start), position)
    }
}
