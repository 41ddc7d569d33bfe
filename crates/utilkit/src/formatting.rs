//! Display formatting for names and money

/// Lowercase the text, then capitalise the first letter of every word.
///
/// A word starts after whitespace or an ASCII character other than a
/// letter, digit or `_`. Non-ASCII punctuation such as `«` or `—` does not
/// break words.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.to_lowercase().chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_break(c);
    }

    out
}

fn is_word_break(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

/// Round up to two decimal places
pub fn round_2_decimal_places(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}

/// Rounded-up amount printed with exactly two decimals
pub fn currency_format(value: f64) -> String {
    format!("{:.2}", round_2_decimal_places(value))
}
