//! Blank and length rules
//!
//! Lengths are counted in characters of the trimmed value.

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// True when the value is empty or only whitespace.
pub fn is_empty(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn min_length(s: &str, min: usize) -> bool {
    trimmed_len(s) >= min
}

pub fn max_length(s: &str, max: usize) -> bool {
    trimmed_len(s) <= max
}

pub fn length_in_range(s: &str, min: usize, max: usize) -> bool {
    let len = trimmed_len(s);
    len >= min && len <= max
}
