//! Lexer driver.
//!
//! The [`Lexer`] walks a [`Cursor`] across the source: skip whitespace, ask
//! the [`ScanDispatcher`] for the token at the cursor, advance past its text,
//! repeat. The first position no classifier accepts ends the scan with a
//! [`LexError`]; there is no recovery.

use std::iter::FusedIterator;

use cplx_util::Span;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::dispatch::ScanDispatcher;
use crate::error::{LexError, LexResult};
use crate::token::Token;

/// Lexer for the expression language.
///
/// Produces tokens one at a time through [`next_token`](Lexer::next_token)
/// or as an [`Iterator`] of `Result<Token, LexError>`. After the end of input
/// or after the first error the lexer is exhausted.
///
/// # Example
///
/// ```
/// use cplx_lex::{Lexer, Token};
///
/// let mut lexer = Lexer::new("2i ** x");
/// assert_eq!(lexer.next_token(), Ok(Some(Token::rational_number("2"))));
/// assert_eq!(lexer.next_token(), Ok(Some(Token::imaginary_unit())));
/// assert_eq!(lexer.token_span().column, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    dispatcher: ScanDispatcher,

    /// Span of the most recently produced token.
    token_span: Span,

    /// Set once the input is consumed or a character was rejected.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` with the default dispatcher.
    pub fn new(source: &'a str) -> Self {
        Self::with_dispatcher(source, ScanDispatcher::new())
    }

    /// Creates a lexer over `source` that classifies with `dispatcher`.
    ///
    /// The dispatcher is stateless, so [`ScanDispatcher::new`] is the only
    /// value there is. Passing it in lets many lexers, possibly on different
    /// threads, share one copy.
    pub fn with_dispatcher(source: &'a str, dispatcher: ScanDispatcher) -> Self {
        Self {
            cursor: Cursor::new(source),
            dispatcher,
            token_span: Span::point(0, 1, 1),
            finished: false,
        }
    }

    /// Returns the next token, `Ok(None)` at the end of input, or the error
    /// for the first unrecognized character.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.finished {
            return Ok(None);
        }

        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            self.finished = true;
            return Ok(None);
        }

        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        match self.dispatcher.scan_next(self.cursor.remaining()) {
            Some(token) => {
                self.cursor.advance_n(token.char_len());
                self.token_span = Span::new(start, self.cursor.position(), line, column);
                trace!(kind = %token.kind(), text = token.text(), offset = start, "scanned token");
                Ok(Some(token))
            },
            None => {
                self.finished = true;
                let found = self.cursor.current_char();
                debug!(%found, line, column, "unrecognized character");
                Err(LexError::UnrecognizedCharacter {
                    found,
                    offset: start,
                    line,
                    column,
                })
            },
        }
    }

    /// Span of the token most recently returned by
    /// [`next_token`](Lexer::next_token).
    pub fn token_span(&self) -> Span {
        self.token_span
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

/// Tokenizes `source`.
///
/// Whitespace separates tokens and is otherwise dropped. Fails on the first
/// character no token class accepts, without returning any tokens.
///
/// # Example
///
/// ```
/// use cplx_lex::{lex, Token};
///
/// let tokens = lex("3.14i*2**3").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::rational_number("3.14"),
///         Token::imaginary_unit(),
///         Token::operator("*"),
///         Token::rational_number("2"),
///         Token::operator("**"),
///         Token::rational_number("3"),
///     ]
/// );
/// assert!(lex("1 + @").is_err());
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(source).collect::<LexResult<Vec<_>>>()?;
    debug!(tokens = tokens.len(), bytes = source.len(), "lexed source");
    Ok(tokens)
}

/// Tokenizes `source`, pairing each token with its source span.
///
/// Same contract as [`lex`].
pub fn lex_spanned(source: &str) -> LexResult<Vec<(Token, Span)>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push((token, lexer.token_span()));
    }
    debug!(tokens = tokens.len(), bytes = source.len(), "lexed source with spans");
    Ok(tokens)
}
