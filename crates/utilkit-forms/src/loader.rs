// File: src/loader.rs
// Purpose: Loaders turn formatted raw text into a typed Value

use crate::error::FieldError;
use crate::value::Value;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type LoadFn = dyn Fn(&str) -> Result<Value, FieldError> + Send + Sync;

/// Converts raw text into a [`Value`].
///
/// This is the first point where malformed input fails; validators only
/// ever see values a loader accepted.
#[derive(Clone)]
pub struct Loader(Arc<LoadFn>);

/// How [`Loader::time_with_layout`] reads timestamps
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeLayout {
    #[default]
    Rfc3339,
    /// A chrono `strftime` format string
    Format(String),
}

impl Loader {
    /// Wrap a custom loading function
    pub fn new<F>(load: F) -> Self
    where
        F: Fn(&str) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        Self(Arc::new(load))
    }

    /// Identity: the raw text becomes `Value::Text`
    pub fn string() -> Self {
        Self::new(|raw| Ok(Value::Text(raw.to_string())))
    }

    /// Signed 64-bit integer; the base is taken from a `0x`, `0o`, `0b` or
    /// leading `0` prefix, decimal otherwise. `_` may separate digits
    /// (`1_000`, `0x_1F`) but cannot lead, trail or repeat.
    pub fn int() -> Self {
        Self::new(|raw| {
            parse_int(raw)
                .map(Value::Int)
                .map_err(|reason| FieldError::parse(raw, reason))
        })
    }

    /// RFC 3339 timestamp
    pub fn time() -> Self {
        Self::time_with_layout(TimeLayout::Rfc3339)
    }

    /// Timestamp in the given layout.
    ///
    /// A `Format` layout may describe a full timestamp with offset, a naive
    /// date and time (read as UTC), or a bare date (midnight UTC).
    pub fn time_with_layout(layout: TimeLayout) -> Self {
        Self::new(move |raw| {
            parse_time(raw, &layout)
                .map(Value::Time)
                .map_err(|reason| FieldError::parse(raw, reason))
        })
    }

    pub fn load(&self, raw: &str) -> Result<Value, FieldError> {
        (self.0)(raw)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::string()
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Loader(..)")
    }
}

fn parse_int(raw: &str) -> Result<i64, String> {
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (radix, digits, prefixed) = if let Some(rest) = strip_prefix_ci(unsigned, "0x") {
        (16, rest, true)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0o") {
        (8, rest, true)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0b") {
        (2, rest, true)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..], true)
    } else {
        (10, unsigned, false)
    };

    // from_str_radix tolerates its own sign, which would allow "--1"
    if digits.starts_with(['+', '-']) {
        return Err("invalid digit found in string".to_string());
    }

    let digits = strip_separators(digits, prefixed)?;
    let magnitude = u64::from_str_radix(&digits, radix).map_err(|e| e.to_string())?;
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| "number too large to fit in target type".to_string())
}

/// Drop `_` separators. Each one must follow a digit (or the base prefix)
/// and be followed by a digit.
fn strip_separators(digits: &str, after_prefix: bool) -> Result<Cow<'_, str>, String> {
    if !digits.contains('_') {
        return Ok(Cow::Borrowed(digits));
    }

    let mut out = String::with_capacity(digits.len());
    let mut after_digit = after_prefix;
    for c in digits.chars() {
        if c == '_' {
            if !after_digit {
                return Err("misplaced digit separator".to_string());
            }
            after_digit = false;
        } else {
            out.push(c);
            after_digit = true;
        }
    }
    if !after_digit {
        return Err("misplaced digit separator".to_string());
    }
    Ok(Cow::Owned(out))
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

fn parse_time(raw: &str, layout: &TimeLayout) -> Result<DateTime<FixedOffset>, String> {
    match layout {
        TimeLayout::Rfc3339 => DateTime::parse_from_rfc3339(raw).map_err(|e| e.to_string()),
        TimeLayout::Format(fmt) => {
            let offset_err = match DateTime::parse_from_str(raw, fmt) {
                Ok(t) => return Ok(t),
                Err(e) => e,
            };
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Ok(Utc.from_utc_datetime(&naive).into());
            }
            if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
                if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                    return Ok(Utc.from_utc_datetime(&midnight).into());
                }
            }
            Err(offset_err.to_string())
        }
    }
}
