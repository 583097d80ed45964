//! Scan dispatcher.
//!
//! Runs every classifier at the same position and turns the single match, if
//! any, into a [`Token`]. The grammars are disjoint by construction, so a
//! second match means a classifier is broken; that is a panic, never a
//! [`LexError`](crate::LexError).

use crate::classify::Classifier;
use crate::token::{Token, TokenKind};

/// Stateless dispatcher over the closed classifier table.
///
/// It holds no mutable state and is `Copy`, so one value can be shared by any
/// number of lexers, on any number of threads.
///
/// # Example
///
/// ```
/// use cplx_lex::{ScanDispatcher, Token};
///
/// let dispatcher = ScanDispatcher::new();
/// assert_eq!(dispatcher.scan_next("**2"), Some(Token::operator("**")));
/// assert_eq!(dispatcher.scan_next("@"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanDispatcher {
    table: &'static [TokenKind],
}

impl ScanDispatcher {
    /// Creates a dispatcher over every token kind.
    pub const fn new() -> Self {
        Self {
            table: &TokenKind::ALL,
        }
    }

    /// Dispatcher over an arbitrary table, for exercising the ambiguity check.
    #[cfg(test)]
    pub(crate) const fn with_table(table: &'static [TokenKind]) -> Self {
        Self { table }
    }

    /// The classifiers tried at every position, in order.
    pub fn classifiers(&self) -> &'static [TokenKind] {
        self.table
    }

    /// Classifies the token at the start of `remaining`.
    ///
    /// Returns `None` when no classifier matches, including for empty input
    /// and for input starting with whitespace.
    ///
    /// # Panics
    ///
    /// Panics if two classifiers match the same position.
    pub fn scan_next(&self, remaining: &str) -> Option<Token> {
        let mut found: Option<(TokenKind, &str)> = None;

        for classifier in self.table {
            let Some(text) = classifier.try_match(remaining) else {
                continue;
            };
            if let Some((first, first_text)) = found {
                unreachable!(
                    "ambiguous token: {} {:?} and {} {:?} both match at {:?}",
                    first,
                    first_text,
                    classifier.kind(),
                    text,
                    remaining
                );
            }
            found = Some((classifier.kind(), text));
        }

        found.map(|(kind, text)| Token::new(kind, text))
    }
}

impl Default for ScanDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
