//! ternc-lex - Lexical Analyzer for the Tern Programming Language
//!
//! This crate turns Tern source text into an ordered sequence of typed,
//! position-annotated tokens for the parser.
//!
//! # Example Usage
//!
//! ```
//! use ternc_lex::{Lexer, TokenKind};
//!
//! let source = "let x = 42";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.text, "let");
//!
//! // Or all at once
//! let tokens = Lexer::new(source).tokenize().unwrap();
//! assert_eq!(tokens.len(), 4);
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Character categories
//! - [`number_fsm`] - Finite-state machine for numeric literals
//! - [`cursor`] - Character cursor for source traversal
//! - [`lexer`] - Category dispatch and per-category tokenizers
//! - [`token`] - Token type definitions
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `abstract`, `as`, `class`, `else`, `extends`, `false`, `final`, `func`,
//! `for`, `if`, `in`, `lazy`, `let`, `new`, `null`, `override`, `private`,
//! `protected`, `return`, `super`, `to`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! A letter or underscore followed by letters, digits, underscores and
//! operator characters, e.g. `an$identifier`.
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`
//! - **Decimal**: `3.14`, `.25`, `2e65`, `42e-65`
//! - **String**: `"hello"`, `"a \" quote"` (kept verbatim, quotes included)
//!
//! ## Operators
//!
//! - **Dispatch**: `.`
//! - **Assignment**: `=`, `<-`, `->`, `+=`, `-=`, `*=`, `/=`, `%=`
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `<=`, `>`, `>=`
//! - **Boolean**: `&&`, `||`, `!`
//!
//! ## Delimiters
//!
//! `:`, `,`, `{`, `}`, `(`, `)`, `[`, `]` and the newline, which is a token.
//! Plain spaces separate tokens and are skipped; no other whitespace is
//! accepted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod number_fsm;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use classify::{classify, CharCategory};
pub use cursor::Cursor;
pub use error::{LexError, LexResult, TokenizeError};
pub use lexer::{Lexer, Recovered, Tokens};
pub use token::{keyword_from_ident, Position, Token, TokenKind};

/// Tokenizes `source` in one call.
///
/// Shorthand for `Lexer::new(source).tokenize()`.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, TokenizeError<'_>> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_expression() {
        let tokens = tokenize("42 + 21").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].kind, tokens[0].text), (TokenKind::Integer, "42"));
        assert_eq!((tokens[1].kind, tokens[1].text), (TokenKind::Plus, "+"));
        assert_eq!((tokens[2].kind, tokens[2].text), (TokenKind::Integer, "21"));
    }

    #[test]
    fn test_class_definition() {
        let source = "abstract class Shape extends Base {\n  \
                      private var sides: Int = 0\n  \
                      override func area(): Decimal = 0.0\n}";
        let kinds = kinds(source);

        assert_eq!(kinds[0], TokenKind::Abstract);
        assert_eq!(kinds[1], TokenKind::Class);
        assert!(kinds.contains(&TokenKind::Extends));
        assert!(kinds.contains(&TokenKind::Private));
        assert!(kinds.contains(&TokenKind::Var));
        assert!(kinds.contains(&TokenKind::Override));
        assert!(kinds.contains(&TokenKind::Decimal));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Newline).count(), 3);
    }

    #[test]
    fn test_loop_and_arrows() {
        let source = "for i in 0 to 10 {\n  total <- total + i\n}\nlet f = (x: Int) -> x * 2";
        let kinds = kinds(source);

        assert!(kinds.contains(&TokenKind::For));
        assert!(kinds.contains(&TokenKind::In));
        assert!(kinds.contains(&TokenKind::To));
        assert!(kinds.contains(&TokenKind::LeftArrow));
        assert!(kinds.contains(&TokenKind::RightArrow));
        assert!(kinds.contains(&TokenKind::Times));
    }

    #[test]
    fn test_conditional() {
        let source = "if a >= 1 && !done || b != null {\n  return this.value\n} else {\n  return super.value\n}";
        let kinds = kinds(source);

        assert!(kinds.contains(&TokenKind::If));
        assert!(kinds.contains(&TokenKind::GreaterOrEqual));
        assert!(kinds.contains(&TokenKind::And));
        assert!(kinds.contains(&TokenKind::Not));
        assert!(kinds.contains(&TokenKind::Or));
        assert!(kinds.contains(&TokenKind::NotEqual));
        assert!(kinds.contains(&TokenKind::Null));
        assert!(kinds.contains(&TokenKind::This));
        assert!(kinds.contains(&TokenKind::Super));
        assert!(kinds.contains(&TokenKind::Dot));
        assert!(kinds.contains(&TokenKind::Else));
    }

    #[test]
    fn test_literals_program() {
        let source = "let xs = [0, 42, 3.14, .25, 2e65, 42e-65, \"s\", true, false]";
        let tokens = tokenize(source).unwrap();
        let literals: Vec<(TokenKind, &str)> = tokens
            .iter()
            .filter(|t| t.kind.is_literal() && t.kind != TokenKind::Identifier)
            .map(|t| (t.kind, t.text))
            .collect();

        assert_eq!(
            literals,
            [
                (TokenKind::Integer, "0"),
                (TokenKind::Integer, "42"),
                (TokenKind::Decimal, "3.14"),
                (TokenKind::Decimal, ".25"),
                (TokenKind::Decimal, "2e65"),
                (TokenKind::Decimal, "42e-65"),
                (TokenKind::String, "\"s\""),
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("      ").unwrap().is_empty());
    }

    #[test]
    fn test_tab_is_rejected() {
        assert!(matches!(
            tokenize("let\tx").map_err(LexError::from),
            Err(LexError::UnrecognizedCharacter { ch: '\t', .. })
        ));
    }

    #[test]
    fn test_crlf_is_rejected() {
        assert!(matches!(
            tokenize("x\r\ny").map_err(LexError::from),
            Err(LexError::UnrecognizedCharacter { ch: '\r', .. })
        ));
    }
}
