//! Diagnostic module - Error reporting infrastructure.
//!
//! A [`Diagnostic`] is built with [`DiagnosticBuilder`] and handed to a
//! [`Handler`], which keeps every report for the caller to inspect or print.
//!
//! # Examples
//!
//! ```
//! use cplx_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use cplx_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("unrecognized character '>'")
//!         .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!         .span(Span::new(2, 3, 1, 3))
//!         .build(),
//! );
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Severity of a diagnostic or of one of its attached messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// The input was rejected
    Error,
    /// Context about why
    Note,
    /// How to fix it
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "error",
            Level::Note => "note",
            Level::Help => "help",
        })
    }
}

/// A note or help line attached under a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubDiagnostic {
    /// [`Level::Note`] or [`Level::Help`]
    pub level: Level,
    /// Text of the line
    pub message: String,
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Stable code, if the diagnostic has one
    pub code: Option<DiagnosticCode>,
    /// The offending source line
    pub snippet: Option<SourceSnippet>,
    /// Notes and helps, in the order they were added
    pub children: Vec<SubDiagnostic>,
}

impl fmt::Display for Diagnostic {
    /// Renders as
    ///
    /// ```text
    /// error[E1002]: unrecognized character '.'
    ///  --> 1:3
    ///   1 | 1 . 2
    ///     |   ^
    ///   = help: ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}\n --> {}", self.message, self.span)?;
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        for child in &self.children {
            write!(f, "\n  = {}: {}", child.level, child.message)?;
        }
        Ok(())
    }
}

/// Collects diagnostics
///
/// Emission goes through `&self` so several producers can share one handler.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `diagnostic`
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Snapshot of everything emitted so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
