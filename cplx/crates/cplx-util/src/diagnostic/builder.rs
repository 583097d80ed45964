//! Fluent construction of [`Diagnostic`]s and the [`SourceSnippet`] shown
//! under them.

use std::fmt;

use super::{Diagnostic, DiagnosticCode, Level, SubDiagnostic};
use crate::Span;

/// The source line a diagnostic points at, with the offending range
/// underlined by carets.
///
/// # Examples
///
/// ```
/// use cplx_util::diagnostic::SourceSnippet;
/// use cplx_util::Span;
///
/// let snippet = SourceSnippet::from_source("x = 1\ny = @", Span::new(10, 11, 2, 5))
///     .with_label("here");
/// assert_eq!(snippet.line, "y = @");
/// assert_eq!(snippet.to_string(), "  2 | y = @\n    |     ^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its line terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// First underlined column (1-based)
    pub start_column: usize,
    /// Column after the last underlined one
    pub end_column: usize,
    /// Text printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Cuts the line holding `span.start` out of `source`.
    ///
    /// The underline covers the span's characters, clipped to the end of that
    /// line. Offsets past the end of `source` land on the last line.
    pub fn from_source(source: &str, span: Span) -> Self {
        let start = span.start.min(source.len());
        let line_start = source
            .get(..start)
            .and_then(|before| before.rfind('\n'))
            .map_or(0, |nl| nl + 1);
        let line_end = source
            .get(start..)
            .and_then(|after| after.find('\n'))
            .map_or(source.len(), |nl| start + nl);
        let line = source
            .get(line_start..line_end)
            .unwrap_or("")
            .trim_end_matches('\r');

        let width = source
            .get(start..span.end.min(line_end).max(start))
            .map_or(0, |text| text.chars().count());
        let start_column = span.column.max(1) as usize;

        Self {
            line: line.to_string(),
            line_number: span.line.max(1) as usize,
            start_column,
            end_column: start_column + width,
            label: None,
        }
    }

    /// Attaches a label after the carets.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for SourceSnippet {
    /// Line number gutter, the line, then a caret row. An empty range still
    /// gets one caret.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line_number.to_string().len().max(3);
        writeln!(f, "{:>gutter$} | {}", self.line_number, self.line)?;

        let pad = self.start_column.saturating_sub(1);
        let carets = self.end_column.saturating_sub(self.start_column).max(1);
        write!(f, "{:>gutter$} | {:pad$}{}", "", "", "^".repeat(carets))?;
        if let Some(label) = &self.label {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

/// Builder for error diagnostics
///
/// # Examples
///
/// ```
/// use cplx_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use cplx_util::Span;
///
/// let diag = DiagnosticBuilder::error("unrecognized character '@'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.children[0].level, Level::Help);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts an error with `message` and no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                level: Level::Error,
                message: message.into(),
                span: Span::DUMMY,
                code: None,
                snippet: None,
                children: Vec::new(),
            },
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Set the source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippet = Some(snippet);
        self
    }

    /// Add a note
    pub fn note(self, message: impl Into<String>) -> Self {
        self.child(Level::Note, message)
    }

    /// Add a help suggestion
    pub fn help(self, message: impl Into<String>) -> Self {
        self.child(Level::Help, message)
    }

    fn child(mut self, level: Level, message: impl Into<String>) -> Self {
        self.diagnostic.children.push(SubDiagnostic {
            level,
            message: message.into(),
        });
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
