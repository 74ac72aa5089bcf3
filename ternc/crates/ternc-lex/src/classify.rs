//! Character classification for the Tern lexer.
//!
//! Every source character falls into exactly one [`CharCategory`]. The lexer
//! uses the category of the character under the cursor to pick a tokenizer,
//! and the individual tokenizers use it to decide where a lexeme ends.
//!
//! Classification is ASCII-only: letters are `a-z` and `A-Z`, digits are
//! `0-9`. Anything outside the grammar's alphabet (tabs, carriage returns,
//! non-ASCII letters) is [`CharCategory::Unrecognized`].

/// Characters that may continue a numeric literal besides the digits.
const NUMBER_SPECIAL_CHARACTERS: &str = "Ee+-.";

/// The delimiter characters, each of which is a token on its own.
const DELIMITERS: &str = "{}[]():,";

/// The characters that begin an operator.
const OPERATORS: &str = "+-*/=<>!&%~$|^";

/// Classification bucket for a single source character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharCategory {
    /// ASCII letter `a-z` or `A-Z`.
    Letter,
    /// The digit `0`.
    ZeroDigit,
    /// A digit `1-9`.
    PositiveDigit,
    /// One of `{ } [ ] ( ) : ,`.
    Delimiter,
    /// One of `+ - * / = < > ! & % ~ $ | ^`.
    Operator,
    /// The dispatch operator `.`, which may also start a decimal literal.
    Dot,
    /// `"`
    DoubleQuote,
    /// `\`
    EscapeCharacter,
    /// `_`
    Underscore,
    /// `\n`
    Newline,
    /// Anything else.
    Unrecognized,
}

impl CharCategory {
    /// Returns true for [`ZeroDigit`](Self::ZeroDigit) and
    /// [`PositiveDigit`](Self::PositiveDigit).
    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, Self::ZeroDigit | Self::PositiveDigit)
    }

    /// Returns true if a character of this category may appear after the
    /// first character of an identifier.
    ///
    /// The operator category is included so that `$` can appear inside
    /// identifiers; the check does not single it out.
    #[inline]
    pub fn is_identifier_part(self) -> bool {
        matches!(
            self,
            Self::Letter | Self::Underscore | Self::Operator | Self::ZeroDigit | Self::PositiveDigit
        )
    }
}

/// Classifies a single character.
///
/// # Example
///
/// ```
/// use ternc_lex::classify::{classify, CharCategory};
///
/// assert_eq!(classify('0'), CharCategory::ZeroDigit);
/// assert_eq!(classify('7'), CharCategory::PositiveDigit);
/// assert_eq!(classify('x'), CharCategory::Letter);
/// assert_eq!(classify('$'), CharCategory::Operator);
/// assert_eq!(classify('\t'), CharCategory::Unrecognized);
/// ```
pub fn classify(c: char) -> CharCategory {
    match c {
        '0' => CharCategory::ZeroDigit,
        '\n' => CharCategory::Newline,
        c if DELIMITERS.contains(c) => CharCategory::Delimiter,
        '.' => CharCategory::Dot,
        '_' => CharCategory::Underscore,
        '\\' => CharCategory::EscapeCharacter,
        '"' => CharCategory::DoubleQuote,
        '1'..='9' => CharCategory::PositiveDigit,
        'a'..='z' | 'A'..='Z' => CharCategory::Letter,
        c if OPERATORS.contains(c) => CharCategory::Operator,
        _ => CharCategory::Unrecognized,
    }
}

/// Returns true for whitespace the lexer skips between tokens.
///
/// Only the plain space qualifies; newlines are tokens of their own.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' '
}

/// Returns true for decimal digits `0-9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    classify(c).is_digit()
}

/// Returns true if `c` may continue a candidate numeral.
///
/// This only decides where scanning a numeral stops. Whether the scanned
/// text is a valid literal is up to the [`number_fsm`](crate::number_fsm).
///
/// # Example
///
/// ```
/// use ternc_lex::classify::is_valid_number_character;
///
/// assert!(is_valid_number_character('5'));
/// assert!(is_valid_number_character('e'));
/// assert!(is_valid_number_character('-'));
/// assert!(!is_valid_number_character('x'));
/// assert!(!is_valid_number_character(' '));
/// ```
#[inline]
pub fn is_valid_number_character(c: char) -> bool {
    NUMBER_SPECIAL_CHARACTERS.contains(c) || is_digit(c)
}
