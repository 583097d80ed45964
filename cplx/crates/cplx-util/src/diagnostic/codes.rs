//! Diagnostic codes.
//!
//! Every diagnostic the front end can produce has a stable code such as
//! `E1001`, so tooling can match on it without parsing the message. Lexer
//! codes live in the `1xxx` range.
//!
//! ```
//! use cplx_util::diagnostic::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.to_string(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: char,
    number: u16,
}

impl DiagnosticCode {
    const fn error(number: u16) -> Self {
        Self { prefix: 'E', number }
    }

    /// E1001: No token class matches the character at the cursor
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::error(1001);
    /// E1002: A `.` that is neither preceded nor followed by a digit
    pub const E_LEXER_STRAY_DECIMAL_POINT: Self = Self::error(1002);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
