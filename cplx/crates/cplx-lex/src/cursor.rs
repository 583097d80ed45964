//! Character cursor for traversing source code.
//!
//! The cursor owns the scan position: a byte offset into the source plus the
//! 1-based line and column of the character under it. Classifiers never see
//! the cursor, only the [`remaining`](Cursor::remaining) suffix.

/// A cursor over a source string.
///
/// # Example
///
/// ```
/// use cplx_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("  1+i");
/// cursor.skip_whitespace();
/// assert_eq!(cursor.current_char(), '1');
/// cursor.advance_n(2);
/// assert_eq!(cursor.remaining(), "i");
/// assert_eq!(cursor.column(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        // Fast path for ASCII
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b.is_ascii() => b as char,
            _ => self.remaining().chars().next().unwrap_or('\0'),
        }
    }

    /// Advances past one character, updating line and column.
    ///
    /// Does nothing at the end of the source.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances past `count` characters, stopping early at the end.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Skips ASCII whitespace (space, tab, newline, carriage return, form
    /// feed). Returns the number of bytes skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.position;
        while !self.is_at_end() && self.current_char().is_ascii_whitespace() {
            self.advance();
        }
        self.position - start
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The source from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
