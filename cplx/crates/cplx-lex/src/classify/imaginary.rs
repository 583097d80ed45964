//! Imaginary unit grammar.
//!
//! `i` is the imaginary unit only when the next character is not a letter;
//! otherwise it starts an identifier (`index`, `ii`). Digits and symbols after
//! it are fine: `i2` is `i` followed by `2`.

use super::is_letter;

pub(super) fn try_match(remaining: &str) -> Option<&str> {
    let mut chars = remaining.chars();
    if chars.next()? != 'i' {
        return None;
    }
    match chars.next() {
        Some(next) if is_letter(next) => None,
        _ => Some(&remaining[..1]),
    }
}
