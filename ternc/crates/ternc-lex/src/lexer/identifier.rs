//! Identifier and keyword lexing.

use crate::classify::classify;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of letters, digits, underscores and operator
    /// characters, then checks the whole run against the reserved words.
    /// Only an exact match is a keyword, so `toString` stays an identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        let position = self.cursor.location();
        let start = self.cursor.position();

        while self
            .cursor
            .current_char()
            .is_some_and(|c| classify(c).is_identifier_part())
        {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, position)
    }
}
