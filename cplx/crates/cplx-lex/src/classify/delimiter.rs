//! Delimiter grammar: exactly one of `( ) [ ] , ;`.

const DELIMITERS: &[u8] = b"()[],;";

pub(super) fn try_match(remaining: &str) -> Option<&str> {
    let first = *remaining.as_bytes().first()?;
    DELIMITERS.contains(&first).then(|| &remaining[..1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_delimiter() {
        for delim in ["(", ")", "[", "]", ",", ";"] {
            assert_eq!(try_match(delim), Some(delim));
        }
    }

    #[test]
    fn test_always_one_character() {
        assert_eq!(try_match("()13"), Some("("));
        assert_eq!(try_match(")--+"), Some(")"));
        assert_eq!(try_match("[[]]"), Some("["));
        assert_eq!(try_match("]/ss"), Some("]"));
        assert_eq!(try_match(";;;%"), Some(";"));
        assert_eq!(try_match(",,,^"), Some(","));
    }

    #[test]
    fn test_no_delimiter_at_start() {
        assert_eq!(try_match("1(2)3"), None);
        assert_eq!(try_match(" []abc"), None);
        assert_eq!(try_match("{"), None);
        assert_eq!(try_match("}"), None);
        assert_eq!(try_match(":"), None);
    }
}
