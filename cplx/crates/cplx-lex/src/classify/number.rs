//! Rational number grammar: `digits? ('.' digits?)?` with at least one digit.
//!
//! Accepted: `0`, `123`, `123.`, `.123`, `12.3`. A `.` only joins the number
//! when a digit sits on at least one side of it, so `.` and `.x` never match.

fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

pub(super) fn try_match(remaining: &str) -> Option<&str> {
    let bytes = remaining.as_bytes();
    let integer = digits(bytes);
    let mut end = integer;

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits(&bytes[end + 1..]);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }

    (end > 0).then(|| &remaining[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(try_match("0"), Some("0"));
        assert_eq!(try_match("1"), Some("1"));
        assert_eq!(try_match("123"), Some("123"));
        assert_eq!(try_match("007"), Some("007"));
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(try_match("1."), Some("1."));
        assert_eq!(try_match("123."), Some("123."));
        assert_eq!(try_match("1.23"), Some("1.23"));
        assert_eq!(try_match("12.3"), Some("12.3"));
        assert_eq!(try_match(".123"), Some(".123"));
    }

    #[test]
    fn test_stops_at_first_non_digit() {
        assert_eq!(try_match("1abc"), Some("1"));
        assert_eq!(try_match("123abc"), Some("123"));
        assert_eq!(try_match("1.abc"), Some("1."));
        assert_eq!(try_match("123.abc"), Some("123."));
        assert_eq!(try_match("1.23abc"), Some("1.23"));
        assert_eq!(try_match(".123abc"), Some(".123"));
        assert_eq!(try_match("1+2"), Some("1"));
    }

    #[test]
    fn test_only_one_decimal_point() {
        assert_eq!(try_match("12.3.4"), Some("12.3"));
        assert_eq!(try_match("1..2"), Some("1."));
        assert_eq!(try_match(".4"), Some(".4"));
    }

    #[test]
    fn test_bare_point_rejected() {
        assert_eq!(try_match("."), None);
        assert_eq!(try_match(". "), None);
        assert_eq!(try_match(".abc"), None);
        assert_eq!(try_match(".."), None);
    }

    #[test]
    fn test_no_number_at_start() {
        assert_eq!(try_match("a(2)3"), None);
        assert_eq!(try_match(" 123"), None);
        assert_eq!(try_match(" .123"), None);
        assert_eq!(try_match("\u{661}"), None);
    }
}
