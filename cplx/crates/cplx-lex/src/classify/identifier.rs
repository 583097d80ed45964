//! Identifier grammar: the longest run of ASCII letters, except the single
//! letter `i`, which belongs to the imaginary unit.

pub(super) fn try_match(remaining: &str) -> Option<&str> {
    let end = remaining
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .count();
    match &remaining[..end] {
        "" | "i" => None,
        word => Some(word),
    }
}
