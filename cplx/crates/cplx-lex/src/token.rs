//! Token type definitions.
//!
//! A [`Token`] is a classified piece of source text. Tokens carry their exact
//! matched text rather than a parsed value: turning `"3.14"` into a number is
//! the evaluator's job.

use std::fmt;

/// The five token families of the expression language.
///
/// The set is closed. Every character that can start a token belongs to
/// exactly one family's grammar, which is what lets the dispatcher treat a
/// double match as a bug rather than an input error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// `+ - * / % ^ = ?` and `**`
    Operator,
    /// `( ) [ ] , ;`
    Delimiter,
    /// A lone `i` not followed by a letter
    ImaginaryUnit,
    /// A run of ASCII letters other than the single letter `i`
    Identifier,
    /// Digits with at most one decimal point, e.g. `12`, `1.`, `.5`
    RationalNumber,
}

impl TokenKind {
    /// Every kind, in dispatch order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::ImaginaryUnit,
        TokenKind::Identifier,
        TokenKind::RationalNumber,
    ];

    /// Human-readable name used in logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::ImaginaryUnit => "imaginary unit",
            TokenKind::Identifier => "identifier",
            TokenKind::RationalNumber => "rational number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit: its kind plus the exact source text it matched.
///
/// Tokens are immutable; two tokens are equal when both kind and text are.
///
/// # Example
///
/// ```
/// use cplx_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Operator, "**");
/// assert_eq!(token.kind(), TokenKind::Operator);
/// assert_eq!(token.text(), "**");
/// assert_eq!(token, Token::operator("**"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty. Use [`try_new`](Token::try_new) for text
    /// that has not been matched by a classifier.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.is_empty(), "empty {} token", kind);
        Self { kind, text }
    }

    /// Creates a token, or `None` if `text` is empty.
    ///
    /// ```
    /// use cplx_lex::{Token, TokenKind};
    ///
    /// assert_eq!(Token::try_new(TokenKind::Delimiter, ";"), Some(Token::delimiter(";")));
    /// assert_eq!(Token::try_new(TokenKind::Operator, ""), None);
    /// ```
    pub fn try_new(kind: TokenKind, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.is_empty()).then_some(Self { kind, text })
    }

    /// Shorthand for an operator token.
    pub fn operator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, text)
    }

    /// Shorthand for a [`TokenKind::Delimiter`] token.
    pub fn delimiter(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Delimiter, text)
    }

    /// The imaginary unit token, `i`.
    pub fn imaginary_unit() -> Self {
        Self::new(TokenKind::ImaginaryUnit, "i")
    }

    /// Shorthand for an [`TokenKind::Identifier`] token.
    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, text)
    }

    /// Shorthand for a [`TokenKind::RationalNumber`] token.
    pub fn rational_number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::RationalNumber, text)
    }

    /// The token's family.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text the token was matched from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the matched text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Consumes the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_kind_and_text() {
        assert_eq!(Token::operator("+"), Token::new(TokenKind::Operator, "+"));
        assert_ne!(Token::operator("+"), Token::operator("-"));
        assert_ne!(Token::identifier("i"), Token::imaginary_unit());
    }

    #[test]
    fn test_accessors() {
        let token = Token::rational_number("3.14");
        assert_eq!(token.kind(), TokenKind::RationalNumber);
        assert_eq!(token.text(), "3.14");
        assert_eq!(token.char_len(), 4);
        assert_eq!(token.into_text(), "3.14");
    }

    #[test]
    fn test_display_is_source_text() {
        assert_eq!(Token::operator("**").to_string(), "**");
        assert_eq!(Token::imaginary_unit().to_string(), "i");
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = TokenKind::ALL.iter().map(TokenKind::name).collect();
        assert_eq!(
            names,
            ["operator", "delimiter", "imaginary unit", "identifier", "rational number"]
        );
        assert_eq!(TokenKind::Delimiter.to_string(), "delimiter");
    }

    #[test]
    #[should_panic(expected = "empty identifier token")]
    fn test_empty_text_rejected() {
        let _ = Token::identifier("");
    }

    #[test]
    #[should_panic(expected = "empty operator token")]
    fn test_new_rejects_empty_text() {
        let _ = Token::new(TokenKind::Operator, String::new());
    }

    #[test]
    fn test_try_new() {
        for kind in TokenKind::ALL {
            assert_eq!(Token::try_new(kind, ""), None);
        }
        assert_eq!(
            Token::try_new(TokenKind::RationalNumber, ".5"),
            Some(Token::rational_number(".5"))
        );
    }
}
