use std::num::IntErrorKind;

/// Parse a whitespace-free integer field of a PED file.
///
/// Integers which do not fit within an `i64` are clamped to `i64::MIN` or `i64::MAX`: they remain
/// integers, and are rejected later on as out-of-range values rather than as non-numeric text.
/// Returns `None` if `token` is not an integer.
#[must_use]
pub fn parse_integer(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e)    => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _                         => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_integer("2"), Some(2));
        assert_eq!(parse_integer("-9"), Some(-9));
        assert_eq!(parse_integer("+1"), Some(1));
        assert_eq!(parse_integer("99999999999"), Some(99_999_999_999));
    }

    #[test]
    fn overflowing_integers_are_clamped() {
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_integer("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn non_integers() {
        for token in ["A", "1.5", "", "-", "1e3", "0x1"] {
            assert_eq!(parse_integer(token), None, "'{token}' should not parse");
        }
    }
}
