//! Email validation

use crate::patterns::EMAIL_REGEX;

/// Checks the trimmed value against [`EMAIL_PATTERN`](crate::patterns::EMAIL_PATTERN).
pub fn email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s.trim())
}
