//! Integer rules

use std::num::ParseIntError;

/// True when the trimmed value is a base-10 signed integer.
pub fn is_integer(s: &str) -> bool {
    s.trim().parse::<i64>().is_ok()
}

/// Parses the trimmed value and checks `min <= n <= max`.
///
/// A value that is not an integer at all is an error; an integer outside the
/// range is `Ok(false)`.
pub fn integer_in_range(s: &str, min: i64, max: i64) -> Result<bool, ParseIntError> {
    let n = s.trim().parse::<i64>()?;
    Ok(n >= min && n <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("abc", false)]
    #[case("\t", false)]
    #[case("ab\t", false)]
    #[case("10.56", false)]
    #[case("10", true)]
    #[case("-10", true)]
    #[case("0", true)]
    #[case(" 42 ", true)]
    fn test_is_integer(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_integer(value), expected);
    }

    #[test]
    fn test_integer_in_range() {
        assert!(integer_in_range("", 1, 5).is_err());
        assert!(integer_in_range("abc", 1, 5).is_err());
        assert!(integer_in_range("10.56", 1, 5).is_err());
        assert_eq!(integer_in_range("10", 1, 10), Ok(true));
        assert_eq!(integer_in_range("-10", -1, 5), Ok(false));
        assert_eq!(integer_in_range("0", 0, 10), Ok(true));
    }
}
