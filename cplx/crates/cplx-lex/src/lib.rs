//! cplx-lex - Lexical analyzer for the cplx expression language.
//!
//! This crate turns an expression such as `3.14i * 2**x` into an ordered
//! sequence of [`Token`]s. Parsing and evaluation happen elsewhere; this crate
//! only classifies text.
//!
//! # Example Usage
//!
//! ```
//! use cplx_lex::{lex, Token, TokenKind};
//!
//! let tokens = lex("   1 + 2 ").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::rational_number("1"),
//!         Token::operator("+"),
//!         Token::rational_number("2"),
//!     ]
//! );
//! assert_eq!(tokens[1].kind(), TokenKind::Operator);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`classify`] - One longest-match classifier per token kind
//! - [`dispatch`] - Runs every classifier at a position
//! - [`cursor`] - Character cursor for source traversal
//! - [`lexer`] - The driver loop and the [`lex`] entry points
//! - [`error`] - [`LexError`] and its diagnostic rendering
//!
//! # Token Kinds
//!
//! - **Operator**: `+`, `-`, `*`, `/`, `%`, `^`, `=`, `?`, `**`
//! - **Delimiter**: `(`, `)`, `[`, `]`, `,`, `;`
//! - **ImaginaryUnit**: `i` when not followed by a letter
//! - **Identifier**: a run of ASCII letters other than a lone `i`
//! - **RationalNumber**: `12`, `12.`, `.5`, `12.5`
//!
//! Whitespace separates tokens. Anything else is a [`LexError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use classify::Classifier;
pub use cursor::Cursor;
pub use dispatch::ScanDispatcher;
pub use error::{LexError, LexResult};
pub use lexer::{lex, lex_spanned, Lexer};
pub use token::{Token, TokenKind};

static_assertions::assert_impl_all!(Token: Send, Sync, Clone, Eq);
static_assertions::assert_impl_all!(TokenKind: Send, Sync, Copy);
static_assertions::assert_impl_all!(ScanDispatcher: Send, Sync, Copy);
static_assertions::assert_impl_all!(LexError: Send, Sync, std::error::Error);
