//! Number literal lexing.
//!
//! The shape of a numeral is decided entirely by the
//! [`number_fsm`](crate::number_fsm); this module only moves the cursor.

use crate::error::{LexError, LexResult};
use crate::number_fsm;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or decimal literal starting at the cursor.
    ///
    /// Entered on a digit, or on a `.` directly followed by a digit.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `007`
    /// - Decimal: `3.14`, `.25`
    /// - Scientific: `2e65`, `42e-65`, `1.5E+3`
    ///
    /// # Errors
    ///
    /// [`LexError::InvalidNumericLiteral`] with the full scanned candidate if
    /// the automaton rejects it. Nothing is consumed in that case.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token<'a>> {
        let position = self.cursor.location();
        let scan = number_fsm::scan(self.cursor.remaining());

        match scan.kind() {
            Some(kind) => {
                self.cursor.advance_bytes(scan.lexeme.len());
                Ok(Token::new(kind, scan.lexeme, position))
            },
            None => Err(LexError::InvalidNumericLiteral {
                text: scan.lexeme.to_string(),
                position,
            }),
        }
    }
}
