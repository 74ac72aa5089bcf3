//! Finite-state machine for numeric literals.
//!
//! The grammar recognised here is
//!
//! ```text
//! number   := integer | fraction | integer? '.' digits exponent?
//! integer  := digit+
//! exponent := ('E' | 'e') ('+' | '-')? digit+
//! ```
//!
//! which the automaton encodes as eight [`State`]s. Scanning is driven by
//! [`is_valid_number_character`]: every character that may belong to a
//! numeral is fed to the automaton, including after it has fallen into
//! [`State::Invalid`]. Only once a character outside that set (or the end of
//! input) is reached does the final state decide whether the whole scanned
//! text is accepted. A rejected candidate never yields a shorter valid
//! prefix, so `3..4` is rejected as a whole rather than lexed as `3`.

use crate::classify::{is_digit, is_valid_number_character};
use crate::token::TokenKind;

/// States of the numeric-literal automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Nothing consumed yet.
    Initial,
    /// One or more digits. Accepting (`INTEGER`).
    Integer,
    /// Just consumed the `.`.
    FractionalBeginning,
    /// Digits after the `.`. Accepting (`DECIMAL`).
    FractionalNumber,
    /// Just consumed `E` or `e`.
    ExponentialBeginning,
    /// Just consumed the exponent's sign.
    SignedExponential,
    /// Digits of the exponent. Accepting (`DECIMAL`).
    ExponentialNumber,
    /// Non-accepting sink.
    Invalid,
}

impl State {
    /// The transition function.
    pub fn next(self, c: char) -> State {
        match self {
            State::Initial => match c {
                '.' => State::FractionalBeginning,
                c if is_digit(c) => State::Integer,
                _ => State::Invalid,
            },
            State::Integer => match c {
                '.' => State::FractionalBeginning,
                'E' | 'e' => State::ExponentialBeginning,
                c if is_digit(c) => State::Integer,
                _ => State::Invalid,
            },
            State::FractionalBeginning => match c {
                c if is_digit(c) => State::FractionalNumber,
                _ => State::Invalid,
            },
            State::FractionalNumber => match c {
                'E' | 'e' => State::ExponentialBeginning,
                c if is_digit(c) => State::FractionalNumber,
                _ => State::Invalid,
            },
            State::ExponentialBeginning => match c {
                '+' | '-' => State::SignedExponential,
                c if is_digit(c) => State::ExponentialNumber,
                _ => State::Invalid,
            },
            State::SignedExponential | State::ExponentialNumber => match c {
                c if is_digit(c) => State::ExponentialNumber,
                _ => State::Invalid,
            },
            State::Invalid => State::Invalid,
        }
    }

    /// The token kind produced when scanning ends in this state, if it is
    /// accepting.
    pub fn accepting_kind(self) -> Option<TokenKind> {
        match self {
            State::Integer => Some(TokenKind::Integer),
            State::FractionalNumber | State::ExponentialNumber => Some(TokenKind::Decimal),
            _ => None,
        }
    }

    /// Returns true for the accepting states.
    #[inline]
    pub fn is_accepting(self) -> bool {
        self.accepting_kind().is_some()
    }
}

/// Outcome of scanning a candidate numeral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scan<'a> {
    /// State the automaton ended in.
    pub state: State,
    /// Every character that was fed to the automaton.
    pub lexeme: &'a str,
}

impl Scan<'_> {
    /// The token kind if the scan ended in an accepting state.
    #[inline]
    pub fn kind(&self) -> Option<TokenKind> {
        self.state.accepting_kind()
    }
}

/// Feeds the leading run of number characters of `text` to a fresh
/// automaton.
///
/// ```
/// use ternc_lex::number_fsm::{scan, State};
///
/// let result = scan("3..4 + x");
/// assert_eq!(result.lexeme, "3..4");
/// assert_eq!(result.state, State::Invalid);
/// ```
pub fn scan(text: &str) -> Scan<'_> {
    let mut state = State::Initial;
    let mut end = 0;

    for (index, c) in text.char_indices() {
        if !is_valid_number_character(c) {
            break;
        }
        state = state.next(c);
        end = index + c.len_utf8();
    }

    Scan {
        state,
        lexeme: &text[..end],
    }
}

/// Runs the automaton over the numeral at the start of `text`.
///
/// Returns the token kind and the full lexeme on acceptance, `None` on
/// rejection.
///
/// ```
/// use ternc_lex::number_fsm::run;
/// use ternc_lex::TokenKind;
///
/// assert_eq!(run("42e-65)"), Some((TokenKind::Decimal, "42e-65")));
/// assert_eq!(run("3.."), None);
/// ```
pub fn run(text: &str) -> Option<(TokenKind, &str)> {
    let result = scan(text);
    result.kind().map(|kind| (kind, result.lexeme))
}
