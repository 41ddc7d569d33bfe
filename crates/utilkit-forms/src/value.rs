// File: src/value.rs
// Purpose: Decoded field values produced by loaders

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// A field value after loading.
///
/// Loaders produce one of a small closed set of variants; validators are
/// written against a variant and report a type mismatch for anything else.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Text(String),
    Int(i64),
    Time(DateTime<FixedOffset>),
}

/// Variant tag of a [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Text,
    Int,
    Time,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Text => "string",
            ValueKind::Int => "integer",
            ValueKind::Time => "time",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Text(_) => ValueKind::Text,
            Value::Int(_) => ValueKind::Int,
            Value::Time(_) => ValueKind::Time,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }

    /// Truthiness used by checkbox-style fields
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Text(s) => !s.is_empty(),
            Value::Int(n) => *n != 0,
            Value::Time(_) => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Time(t) => f.write_str(&t.to_rfc3339()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Value::Time(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(-7).to_string(), "-7");

        let t = DateTime::parse_from_rfc3339("2024-05-01T10:30:00+02:00").unwrap();
        assert_eq!(Value::from(t).to_string(), "2024-05-01T10:30:00+02:00");
    }

    #[test]
    fn test_kind_and_accessors() {
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(3).as_int(), Some(3));
        assert_eq!(Value::from(3).as_str(), None);
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(ValueKind::Int.to_string(), "integer");
    }

    #[test]
    fn test_to_bool() {
        assert!(!Value::Null.to_bool());
        assert!(Value::from("on").to_bool());
        assert!(!Value::from("").to_bool());
        assert!(!Value::from(0).to_bool());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&vec![Value::Null, Value::from("a"), Value::from(2)]).unwrap();
        assert_eq!(json, r#"[null,"a",2]"#);
    }
}
