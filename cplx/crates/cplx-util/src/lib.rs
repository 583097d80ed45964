//! cplx-util - Foundation types shared by the cplx front end.
//!
//! This crate holds the pieces every phase needs but none of them owns:
//!
//! - [`span`] - source locations (byte range plus 1-based line/column)
//! - [`diagnostic`] - coded diagnostics, source snippets and the [`Handler`]
//!   that collects them
//!
//! # Example
//!
//! ```
//! use cplx_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet, Span};
//!
//! let span = Span::new(4, 5, 1, 5);
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("unrecognized character '@'")
//!         .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!         .span(span)
//!         .snippet(SourceSnippet::from_source("1 + @", span))
//!         .build(),
//! );
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet, SubDiagnostic,
};
pub use span::Span;

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(Diagnostic: Clone, Send, Sync);
