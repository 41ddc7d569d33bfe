//! Password validation

use unicode_general_category::{get_general_category, GeneralCategory};

/// Character classes a password may be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

/// Class of `c` by Unicode general category: `Lu`, `Ll`, `N*`, `P*` or `S*`.
/// Anything else (spaces, controls, format chars, marks, titlecase and
/// other letters, private use, unassigned) has no class.
fn classify(c: char) -> Option<CharClass> {
    use GeneralCategory::*;

    match get_general_category(c) {
        UppercaseLetter => Some(CharClass::Upper),
        LowercaseLetter => Some(CharClass::Lower),
        DecimalNumber | LetterNumber | OtherNumber => Some(CharClass::Digit),
        ConnectorPunctuation | DashPunctuation | OpenPunctuation | ClosePunctuation
        | InitialPunctuation | FinalPunctuation | OtherPunctuation | MathSymbol
        | CurrencySymbol | ModifierSymbol | OtherSymbol => Some(CharClass::Symbol),
        _ => None,
    }
}

/// Validates a password after trimming surrounding whitespace.
///
/// Rules:
/// - at least one uppercase letter, one lowercase letter, one digit and one
///   punctuation or symbol character
/// - at least eight characters long
/// - every character belongs to one of those four classes; anything else,
///   including whitespace inside the value, rejects it outright
pub fn password(s: &str) -> bool {
    let (mut upper, mut lower, mut digit, mut symbol) = (false, false, false, false);
    let mut total = 0usize;

    for c in s.trim().chars() {
        match classify(c) {
            Some(CharClass::Upper) => upper = true,
            Some(CharClass::Lower) => lower = true,
            Some(CharClass::Digit) => digit = true,
            Some(CharClass::Symbol) => symbol = true,
            None => return false,
        }
        total += 1;
    }

    upper && lower && digit && symbol && total >= 8
}
