// File: src/error.rs
// Purpose: Per-field failure kinds collected by a form

use crate::value::ValueKind;
use utilkit_validation::messages::{INVALID_INTEGER, INVALID_STRING};

/// Why a single field rejected its raw input.
///
/// These never abort a form validation pass: the form records them per
/// field and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Raw input was empty on a required field
    #[error("{label} is required")]
    Required { label: String },

    /// The loader could not decode the (formatted) raw text
    #[error("invalid value {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// A validator rejected the decoded value
    #[error("{message}")]
    Validation { message: String },

    /// A validator was attached to a field whose loader yields another type
    #[error("{}", mismatch_message(.expected))]
    TypeMismatch { expected: ValueKind, found: ValueKind },
}

fn mismatch_message(expected: &ValueKind) -> &'static str {
    match expected {
        ValueKind::Text => INVALID_STRING,
        ValueKind::Int => INVALID_INTEGER,
        ValueKind::Time => "Enter a date and time value.",
        ValueKind::Null => "Enter a value.",
    }
}

impl FieldError {
    pub fn validation(message: impl Into<String>) -> Self {
        FieldError::Validation {
            message: message.into(),
        }
    }

    pub fn parse(input: impl Into<String>, reason: impl ToString) -> Self {
        FieldError::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FieldError::Required { .. })
    }
}
