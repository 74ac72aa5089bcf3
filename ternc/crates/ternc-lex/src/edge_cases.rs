//! Edge case tests for ternc-lex

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, Position, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).tokenize().unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    // ==================== IDENTIFIERS ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t, [Token::new(TokenKind::Identifier, "x", Position::new(0, 0))]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1", name);
        let t = lex_all(&source);
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[1].text, name);
        assert_eq!(t[2].column(), Some(10005));
    }

    #[test]
    fn test_edge_lone_underscore() {
        let t = lex_all("_ _x");
        assert_eq!(t[0].text, "_");
        assert_eq!(t[1].text, "_x");
        assert!(t.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        assert_eq!(
            kinds("lettuce iffy tos"),
            [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_dollar_inside_identifier() {
        let t = lex_all("an$identifier");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text, "an$identifier");
    }

    #[test]
    fn test_edge_unspaced_operators_join_identifier() {
        let t = lex_all("x<-1");
        assert_eq!(t.len(), 1);
        assert_eq!((t[0].kind, t[0].text), (TokenKind::Identifier, "x<-1"));
    }

    #[test]
    fn test_edge_dot_splits_identifier() {
        assert_eq!(
            kinds("x.y"),
            [TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier]
        );
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007")[0].kind, TokenKind::Integer);
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        assert_eq!(kinds("-5"), [TokenKind::Minus, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_leading_dot_decimal() {
        let t = lex_all(".5 .x");
        assert_eq!((t[0].kind, t[0].text), (TokenKind::Decimal, ".5"));
        assert_eq!(t[1].kind, TokenKind::Dot);
        assert_eq!(t[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_trailing_dot_is_invalid() {
        assert_eq!(
            Lexer::new("1.").tokenize().map_err(LexError::from),
            Err(LexError::InvalidNumericLiteral {
                text: "1.".to_string(),
                position: Position::new(0, 0),
            })
        );
    }

    #[test]
    fn test_edge_number_then_method_call_is_invalid() {
        assert!(matches!(
            Lexer::new("0.5.floor").tokenize().map_err(LexError::from),
            Err(LexError::InvalidNumericLiteral { ref text, .. }) if text == "0.5."
        ));
    }

    #[test]
    fn test_edge_number_before_delimiter() {
        assert_eq!(
            kinds("f(1,2.5)"),
            [
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Integer,
                TokenKind::Comma,
                TokenKind::Decimal,
                TokenKind::RightParen,
            ]
        );
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_triple_equal() {
        assert_eq!(kinds("==="), [TokenKind::DoubleEqual, TokenKind::Equal]);
    }

    #[test]
    fn test_edge_double_not() {
        assert_eq!(kinds("!!"), [TokenKind::Not, TokenKind::Not]);
    }

    #[test]
    fn test_edge_arrow_then_number() {
        assert_eq!(kinds("<-1"), [TokenKind::LeftArrow, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = kinds("+ - * / % == != < > <= >= && || ! += -= *= /= %= <- -> . =");
        assert_eq!(t.len(), 23);
        assert!(t.contains(&TokenKind::ModEqual));
    }

    #[test]
    fn test_edge_single_pipe_at_end() {
        assert!(matches!(
            Lexer::new("a |").tokenize().map_err(LexError::from),
            Err(LexError::UnrecognizedOperator { ch: '|', .. })
        ));
    }

    // ==================== STRINGS ====================

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!((t[0].kind, t[0].text), (TokenKind::String, "\"\""));
    }

    #[test]
    fn test_edge_escaped_quote() {
        let t = lex_all(r#""a\"b" c"#);
        assert_eq!(t[0].text, r#""a\"b""#);
        assert_eq!(t[1].column(), Some(7));
    }

    #[test]
    fn test_edge_non_ascii_inside_string() {
        let t = lex_all("\"héllo\" x");
        assert_eq!(t[0].text, "\"héllo\"");
        assert_eq!(t[1].position, Some(Position::new(0, 8)));
    }

    #[test]
    fn test_edge_lone_quote() {
        assert!(matches!(
            Lexer::new("\"").tokenize().map_err(LexError::from),
            Err(LexError::UnterminatedString { ref text, .. }) if text == "\""
        ));
    }

    // ==================== LAYOUT ====================

    #[test]
    fn test_edge_blank_lines() {
        let t = lex_all("\n\n");
        assert_eq!(t[0].position, Some(Position::new(0, 0)));
        assert_eq!(t[1].position, Some(Position::new(1, 0)));
        assert!(t.iter().all(|t| t.kind == TokenKind::Newline));
    }

    #[test]
    fn test_edge_trailing_newline() {
        assert_eq!(kinds("x\n"), [TokenKind::Identifier, TokenKind::Newline]);
    }

    #[test]
    fn test_edge_indentation_counts_columns() {
        let t = lex_all("{\n    x\n}");
        assert_eq!(t[2].position, Some(Position::new(1, 4)));
        assert_eq!(t[4].position, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_edge_non_ascii_letter_is_rejected() {
        assert_eq!(
            Lexer::new("x é").tokenize().map_err(LexError::from),
            Err(LexError::UnrecognizedCharacter {
                ch: 'é',
                position: Position::new(0, 2),
            })
        );
    }

    #[test]
    fn test_edge_error_position_on_later_line() {
        let err = Lexer::new("let a = 1\nlet b = 3..4").tokenize().unwrap_err();
        assert_eq!(err.position(), Position::new(1, 8));
    }
}
