//! Token classifiers.
//!
//! Each token family has one classifier: a pure longest-match rule that looks
//! at the remaining input and returns the prefix belonging to its family, or
//! `None`. The grammars live in their own modules:
//!
//! - `operator` - `+ - * / % ^ = ?` and `**`
//! - `delimiter` - `( ) [ ] , ;`
//! - `imaginary` - the imaginary unit `i`
//! - `identifier` - runs of ASCII letters
//! - `number` - rational number literals
//!
//! The family set is closed, so [`TokenKind`] itself is the classifier: an
//! exhaustive `match` routes each kind to its grammar.

mod delimiter;
mod identifier;
mod imaginary;
mod number;
mod operator;

use crate::token::TokenKind;

/// A longest-match rule for one token family.
pub trait Classifier {
    /// The family this classifier recognizes.
    fn kind(&self) -> TokenKind;

    /// Returns the longest prefix of `remaining` in this family's grammar.
    ///
    /// Classifiers never skip leading whitespace and never match the empty
    /// string; an empty `remaining` always yields `None`.
    fn try_match<'s>(&self, remaining: &'s str) -> Option<&'s str>;
}

impl Classifier for TokenKind {
    fn kind(&self) -> TokenKind {
        *self
    }

    fn try_match<'s>(&self, remaining: &'s str) -> Option<&'s str> {
        if remaining.is_empty() {
            return None;
        }
        match self {
            TokenKind::Operator => operator::try_match(remaining),
            TokenKind::Delimiter => delimiter::try_match(remaining),
            TokenKind::ImaginaryUnit => imaginary::try_match(remaining),
            TokenKind::Identifier => identifier::try_match(remaining),
            TokenKind::RationalNumber => number::try_match(remaining),
        }
    }
}

/// Letters as far as the grammar is concerned.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}
