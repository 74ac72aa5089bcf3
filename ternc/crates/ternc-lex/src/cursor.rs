//! Character cursor for traversing source code.
//!
//! The `Cursor` keeps the byte offset of the next character to consume and
//! the zero-based line/column of that character. It only moves forward.

use crate::classify::is_whitespace;
use crate::token::Position;

/// A forward-only cursor over a source buffer.
///
/// # Example
///
/// ```
/// use ternc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current_char(), Some('l'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('e'));
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (0-based).
    line: u32,

    /// Current column number (0-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            column: 0,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `offset` characters ahead of the cursor
    /// (0 = current) without consuming anything.
    ///
    /// ```
    /// use ternc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<-");
    /// assert_eq!(cursor.peek_char(1), Some('-'));
    /// assert_eq!(cursor.peek_char(2), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Consumes one character and returns it.
    ///
    /// A consumed `\n` moves to the start of the next line; any other
    /// character moves one column right. Line and column saturate at
    /// `u32::MAX`. Does nothing at the end.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 0;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(c)
    }

    /// Consumes up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes the next `count` bytes, which must end on a character
    /// boundary. Used to consume a lexeme already sliced from
    /// [`remaining`](Self::remaining).
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        while self.position < end {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Skips a run of plain spaces. Newlines are left in place.
    pub fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Current line number (0-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Line and column of the character under the cursor.
    #[inline]
    pub fn location(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
