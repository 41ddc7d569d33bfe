// File: src/patterns.rs
// Purpose: Regular expressions shared by the rule functions and form validators

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of printable ASCII specials, then one or more dot separated
/// labels. A label starts and ends with an alphanumeric character, so a
/// trailing dot never matches.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9_-]{0,61}[a-zA-Z0-9])+\.[a-zA-Z0-9](?:[a-zA-Z0-9_-]{0,61}[a-zA-Z0-9])*$";

/// Letters and spaces, at least five of them.
pub const NAME_PATTERN: &str = r"^[A-Za-z ]{5,}$";

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex")
});

pub static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern() {
        assert!(NAME_REGEX.is_match("Richa Chawla"));
        assert!(NAME_REGEX.is_match("Alice"));
        assert!(!NAME_REGEX.is_match("ABC"));
        assert!(!NAME_REGEX.is_match("R2-D2 unit"));
    }

    #[test]
    fn test_patterns_compile() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
        assert!(Regex::new(NAME_PATTERN).is_ok());
    }
}
