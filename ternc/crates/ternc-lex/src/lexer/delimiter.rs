//! Delimiter and newline lexing.

use crate::error::LexResult;
use crate::token::{delimiter_from_char, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes one of `: , { } ( ) [ ]`.
    pub(crate) fn lex_delimiter(&mut self, current: char) -> LexResult<Token<'a>> {
        let kind = delimiter_from_char(current).ok_or_else(|| self.unrecognized_character(current))?;
        let position = self.cursor.location();
        let start = self.cursor.position();
        self.cursor.advance();
        Ok(Token::new(kind, self.cursor.slice_from(start), position))
    }

    /// Lexes a single `\n`.
    ///
    /// The token is positioned where the newline stands; consuming it moves
    /// the cursor to column 0 of the next line.
    pub(crate) fn lex_newline(&mut self) -> Token<'a> {
        let position = self.cursor.location();
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(TokenKind::Newline, self.cursor.slice_from(start), position)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Position, TokenKind};
    use crate::Lexer;

    fn lex_one(source: &str) -> (TokenKind, String) {
        let token = Lexer::new(source).next_token().unwrap();
        (token.kind, token.text.to_string())
    }

    #[test]
    fn test_delimiters() {
        let cases = [
            (":", TokenKind::Colon),
            (",", TokenKind::Comma),
            ("{", TokenKind::LeftBrace),
            ("}", TokenKind::RightBrace),
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
            ("[", TokenKind::LeftBracket),
            ("]", TokenKind::RightBracket),
        ];
        for (source, kind) in cases {
            assert_eq!(lex_one(source), (kind, source.to_string()));
        }
    }

    #[test]
    fn test_newline_token() {
        assert_eq!(lex_one("\n"), (TokenKind::Newline, "\n".to_string()));
    }

    #[test]
    fn test_newline_position_and_cursor_reset() {
        let mut lexer = Lexer::new("ab\n\nc");
        lexer.next_token().unwrap();

        let first = lexer.next_token().unwrap();
        assert_eq!(first.position, Some(Position::new(0, 2)));
        assert_eq!((lexer.line(), lexer.column()), (1, 0));

        let second = lexer.next_token().unwrap();
        assert_eq!(second.position, Some(Position::new(1, 0)));

        let c = lexer.next_token().unwrap();
        assert_eq!(c.position, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_adjacent_delimiters() {
        let kinds: Vec<TokenKind> = Lexer::new("([{}])")
            .tokenize()
            .unwrap()
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            [
                TokenKind::LeftParen,
                TokenKind::LeftBracket,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::RightBracket,
                TokenKind::RightParen
            ]
        );
    }
}
