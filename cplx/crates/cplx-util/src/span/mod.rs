//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range into the source plus the 1-based
//! line/column of its first character. The lexer attaches one to every token
//! it produces and to every error it reports.
//!
//! # Examples
//!
//! ```
//! use cplx_util::span::Span;
//!
//! let span = Span::new(4, 6, 1, 5);
//! assert_eq!(span.len(), 2);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// Offsets are byte offsets into the source string. `line` and
/// `column` describe where `start` sits; columns count characters, not bytes.
///
/// # Examples
///
/// ```
/// use cplx_util::span::Span;
///
/// let span = Span::new(0, 3, 1, 1);
/// assert_eq!(&"3.5 + i"[span.start..span.end], "3.5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location
    ///
    /// # Examples
    ///
    /// ```
    /// use cplx_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use cplx_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
