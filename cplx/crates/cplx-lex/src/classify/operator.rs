//! Operator grammar: `**` or one of `+ - * / % ^ = ?`.

const SINGLE: &[u8] = b"+-*/%^=?";

/// `**` wins over `*` at the same position.
pub(super) fn try_match(remaining: &str) -> Option<&str> {
    if remaining.starts_with("**") {
        return Some(&remaining[..2]);
    }
    let first = *remaining.as_bytes().first()?;
    SINGLE.contains(&first).then(|| &remaining[..1])
}
