//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme it was produced
//! from and the [`Position`] of the lexeme's first character. Lexemes borrow
//! from the source buffer, so tokens are cheap to copy around and keep no
//! reference to the lexer that produced them.

use std::fmt;

/// A zero-based line/column location in the source.
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Line number (0-based).
    pub line: u32,
    /// Column number (0-based, in characters).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The closed set of lexical token types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TokenKind {
    // Keywords
    /// `abstract`
    Abstract,
    /// `as`
    As,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `extends`
    Extends,
    /// `false`
    False,
    /// `final`
    Final,
    /// `func`
    Func,
    /// `for`
    For,
    /// `if`
    If,
    /// `in`
    In,
    /// `lazy`
    Lazy,
    /// `let`
    Let,
    /// `new`
    New,
    /// `null`
    Null,
    /// `override`
    Override,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `to`
    To,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    // Dispatch
    /// `.`
    Dot,

    // Assignment
    /// `=`
    Equal,
    /// `<-`
    LeftArrow,
    /// `->`
    RightArrow,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    TimesEqual,
    /// `/=`
    DivEqual,
    /// `%=`
    ModEqual,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Div,
    /// `%`
    Mod,

    // Comparison
    /// `==`
    DoubleEqual,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,

    // Boolean
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    // Identifier and literals
    /// A name that is not a keyword.
    Identifier,
    /// An integer literal such as `42`.
    Integer,
    /// A fractional or scientific literal such as `3.14`, `.25` or `2e65`.
    Decimal,
    /// A double-quoted string literal, quotes included.
    String,

    // Delimiters
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `\n`
    Newline,

    // Special
    /// Terminal sentinel returned once the input is exhausted.
    EndOfInput,
    /// A lexeme that could not be tokenized. Only produced by
    /// [`Lexer::tokenize_recovering`](crate::Lexer::tokenize_recovering).
    Unrecognized,
}

/// The reserved words of the language, in alphabetical order.
pub const KEYWORDS: [&str; 25] = [
    "abstract", "as", "class", "else", "extends", "false", "final", "func", "for", "if", "in",
    "lazy", "let", "new", "null", "override", "private", "protected", "return", "super", "to",
    "this", "true", "var", "while",
];

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use ternc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("func"), Some(TokenKind::Func));
/// assert_eq!(keyword_from_ident("toString"), None);
/// assert_eq!(keyword_from_ident("Func"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "abstract" => TokenKind::Abstract,
        "as" => TokenKind::As,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "extends" => TokenKind::Extends,
        "false" => TokenKind::False,
        "final" => TokenKind::Final,
        "func" => TokenKind::Func,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "lazy" => TokenKind::Lazy,
        "let" => TokenKind::Let,
        "new" => TokenKind::New,
        "null" => TokenKind::Null,
        "override" => TokenKind::Override,
        "private" => TokenKind::Private,
        "protected" => TokenKind::Protected,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "to" => TokenKind::To,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Looks up a one- or two-character operator lexeme.
///
/// `&` and `|` on their own are not operators, and neither are `~`, `$`
/// and `^`, which only occur inside identifiers.
pub fn operator_from_str(op: &str) -> Option<TokenKind> {
    let kind = match op {
        "." => TokenKind::Dot,
        "=" => TokenKind::Equal,
        "<-" => TokenKind::LeftArrow,
        "->" => TokenKind::RightArrow,
        "+=" => TokenKind::PlusEqual,
        "-=" => TokenKind::MinusEqual,
        "*=" => TokenKind::TimesEqual,
        "/=" => TokenKind::DivEqual,
        "%=" => TokenKind::ModEqual,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Times,
        "/" => TokenKind::Div,
        "%" => TokenKind::Mod,
        "==" => TokenKind::DoubleEqual,
        "!=" => TokenKind::NotEqual,
        "<" => TokenKind::Less,
        "<=" => TokenKind::LessOrEqual,
        ">" => TokenKind::Greater,
        ">=" => TokenKind::GreaterOrEqual,
        "&&" => TokenKind::And,
        "||" => TokenKind::Or,
        "!" => TokenKind::Not,
        _ => return None,
    };
    Some(kind)
}

/// Looks up a delimiter character.
pub fn delimiter_from_char(c: char) -> Option<TokenKind> {
    let kind = match c {
        ':' => TokenKind::Colon,
        ',' => TokenKind::Comma,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        _ => return None,
    };
    Some(kind)
}

impl TokenKind {
    /// Returns true for the 25 reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Abstract
                | Self::As
                | Self::Class
                | Self::Else
                | Self::Extends
                | Self::False
                | Self::Final
                | Self::Func
                | Self::For
                | Self::If
                | Self::In
                | Self::Lazy
                | Self::Let
                | Self::New
                | Self::Null
                | Self::Override
                | Self::Private
                | Self::Protected
                | Self::Return
                | Self::Super
                | Self::To
                | Self::This
                | Self::True
                | Self::Var
                | Self::While
        )
    }

    /// Returns true for the literal kinds, identifiers included.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Integer | Self::Decimal | Self::String
        )
    }

    /// The upper-snake-case name of the kind, e.g. `LEFT_ARROW`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Abstract => "ABSTRACT",
            Self::As => "AS",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::Extends => "EXTENDS",
            Self::False => "FALSE",
            Self::Final => "FINAL",
            Self::Func => "FUNC",
            Self::For => "FOR",
            Self::If => "IF",
            Self::In => "IN",
            Self::Lazy => "LAZY",
            Self::Let => "LET",
            Self::New => "NEW",
            Self::Null => "NULL",
            Self::Override => "OVERRIDE",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::To => "TO",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Dot => "DOT",
            Self::Equal => "EQUAL",
            Self::LeftArrow => "LEFT_ARROW",
            Self::RightArrow => "RIGHT_ARROW",
            Self::PlusEqual => "PLUS_EQUAL",
            Self::MinusEqual => "MINUS_EQUAL",
            Self::TimesEqual => "TIMES_EQUAL",
            Self::DivEqual => "DIV_EQUAL",
            Self::ModEqual => "MOD_EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::DoubleEqual => "DOUBLE_EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Less => "LESS",
            Self::LessOrEqual => "LESS_OR_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterOrEqual => "GREATER_OR_EQUAL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Identifier => "IDENTIFIER",
            Self::Integer => "INTEGER",
            Self::Decimal => "DECIMAL",
            Self::String => "STRING",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::Newline => "NEWLINE",
            Self::EndOfInput => "END_OF_INPUT",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token produced by the lexer.
///
/// `text` is the exact lexeme consumed from the source. The end-of-input
/// sentinel carries an empty lexeme and no position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The consumed lexeme.
    pub text: &'src str,
    /// Where the lexeme starts; `None` only for [`TokenKind::EndOfInput`].
    pub position: Option<Position>,
}

impl<'src> Token<'src> {
    /// Creates a token for a lexeme starting at `position`.
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, position: Position) -> Self {
        Self {
            kind,
            text,
            position: Some(position),
        }
    }

    /// The end-of-input sentinel.
    #[inline]
    pub const fn end_of_input() -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: "",
            position: None,
        }
    }

    /// Returns true for the end-of-input sentinel.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Line of the lexeme's first character.
    #[inline]
    pub fn line(&self) -> Option<u32> {
        self.position.map(|p| p.line)
    }

    /// Column of the lexeme's first character.
    #[inline]
    pub fn column(&self) -> Option<u32> {
        self.position.map(|p| p.column)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "<{}, \"{}\", {}>",
                self.kind,
                self.text.escape_debug(),
                position
            ),
            None => write!(f, "<{}>", self.kind),
        }
    }
}
