//! Edge case tests for cplx-lex
