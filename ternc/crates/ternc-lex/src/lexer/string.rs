//! String literal lexing.

use crate::classify::{classify, CharCategory};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// The literal ends at the first `"` after the opening one whose
    /// immediately preceding character is not `\`. Only that single
    /// character is looked back at, so in `"a\\"` the final quote still
    /// counts as escaped. Escape sequences are not decoded; the token text
    /// is the raw literal including both quotes. Newlines may appear inside
    /// the literal.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedString`] if the input ends first.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token<'a>> {
        let position = self.cursor.location();
        let rest = self.cursor.remaining();
        let mut previous = None;

        for (index, c) in rest.char_indices() {
            let closes = index > 0
                && classify(c) == CharCategory::DoubleQuote
                && previous.map(classify) != Some(CharCategory::EscapeCharacter);

            if closes {
                let text = &rest[..index + c.len_utf8()];
                self.cursor.advance_bytes(text.len());
                return Ok(Token::new(TokenKind::String, text, position));
            }
            previous = Some(c);
        }

        Err(LexError::UnterminatedString {
            text: rest.to_string(),
            position,
        })
    }
}
