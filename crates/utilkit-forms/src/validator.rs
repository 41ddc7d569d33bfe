// File: src/validator.rs
// Purpose: Business rules checked against a field's decoded value

use crate::error::FieldError;
use crate::value::{Value, ValueKind};
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use utilkit_validation::patterns::{EMAIL_REGEX, NAME_REGEX};

type CheckFn = dyn Fn(&Value) -> Result<(), FieldError> + Send + Sync;

/// A rule bound to its configuration (pattern, bounds, message).
///
/// Validators run after loading, in declaration order; the first failure
/// is the field's error.
#[derive(Clone)]
pub struct Validator(Arc<CheckFn>);

impl Validator {
    /// Rule over any decoded value
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Rule over text values; other variants fail with `TypeMismatch`
    pub fn text<F>(check: F) -> Self
    where
        F: Fn(&str) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        Self::custom(move |value| match value {
            Value::Text(s) => check(s),
            other => Err(mismatch(ValueKind::Text, other)),
        })
    }

    /// Rule over integer values; other variants fail with `TypeMismatch`
    pub fn int<F>(check: F) -> Self
    where
        F: Fn(i64) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        Self::custom(move |value| match value {
            Value::Int(n) => check(*n),
            other => Err(mismatch(ValueKind::Int, other)),
        })
    }

    /// The trimmed text must match `pattern` in full.
    ///
    /// Compiling happens here, so a malformed expression surfaces when the
    /// form is built rather than on a request.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self::matching(re, message))
    }

    /// Like [`Validator::pattern`] with an already compiled regex, used as is.
    pub fn matching(re: Regex, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::text(move |s| {
            if re.is_match(s.trim()) {
                Ok(())
            } else {
                Err(FieldError::validation(message.as_str()))
            }
        })
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::matching(EMAIL_REGEX.clone(), message)
    }

    /// Letters and spaces, five characters or more
    pub fn name(message: impl Into<String>) -> Self {
        Self::matching(NAME_REGEX.clone(), message)
    }

    /// See [`utilkit_validation::password`] for the rules.
    pub fn password(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::text(move |s| {
            if utilkit_validation::password(s) {
                Ok(())
            } else {
                Err(FieldError::validation(message.as_str()))
            }
        })
    }

    /// Inclusive integer range
    pub fn range(min: i64, max: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::int(move |n| {
            if n < min || n > max {
                Err(FieldError::validation(message.as_str()))
            } else {
                Ok(())
            }
        })
    }

    pub fn check(&self, value: &Value) -> Result<(), FieldError> {
        (self.0)(value)
    }
}

fn mismatch(expected: ValueKind, found: &Value) -> FieldError {
    FieldError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}
