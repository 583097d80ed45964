//! Lexical error types.

use cplx_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet, Span};
use thiserror::Error;

/// Error returned when the source cannot be tokenized.
///
/// Lexing is all-or-nothing: the first error aborts the whole call and no
/// partial token sequence is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// No token class matches the character at the cursor.
    #[error("unrecognized character '{found}' at line {line}, column {column}")]
    UnrecognizedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of the character in the source.
        offset: usize,
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based, in characters).
        column: u32,
    },
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// The character that could not be classified.
    pub fn found(&self) -> char {
        match self {
            LexError::UnrecognizedCharacter { found, .. } => *found,
        }
    }

    /// Byte offset of the offending character.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { offset, .. } => *offset,
        }
    }

    /// Source span covering the offending character.
    pub fn span(&self) -> Span {
        match *self {
            LexError::UnrecognizedCharacter {
                found,
                offset,
                line,
                column,
            } => Span::new(offset, offset + found.len_utf8(), line, column),
        }
    }

    /// Diagnostic code for this error.
    ///
    /// A `.` only ever fails when no digit is next to it, so it gets its own
    /// code.
    pub fn code(&self) -> DiagnosticCode {
        match self.found() {
            '.' => DiagnosticCode::E_LEXER_STRAY_DECIMAL_POINT,
            _ => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    /// Renders the error as a diagnostic with a snippet of `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use cplx_lex::lex;
    ///
    /// let source = "1 + @";
    /// let err = lex(source).unwrap_err();
    /// let diag = err.to_diagnostic(source);
    /// assert_eq!(diag.code.map(|c| c.to_string()), Some("E1001".to_string()));
    /// assert_eq!(diag.snippet.map(|s| s.line), Some("1 + @".to_string()));
    /// ```
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = self.span();
        let snippet = SourceSnippet::from_source(source, span).with_label("not part of any token");
        let builder = DiagnosticBuilder::error(format!("unrecognized character '{}'", self.found()))
            .code(self.code())
            .span(span)
            .snippet(snippet);

        match self.found() {
            '.' => builder
                .help("a decimal point needs a digit on at least one side, e.g. `1.`, `.5` or `1.5`")
                .build(),
            c if !c.is_ascii() => builder
                .note("only ASCII letters and digits are recognized")
                .build(),
            _ => builder.build(),
        }
    }

    /// Reports the error into `handler`.
    pub fn emit(&self, source: &str, handler: &Handler) {
        handler.emit_diagnostic(self.to_diagnostic(source));
    }
}
