// File: src/field.rs
// Purpose: A single named input slot and its validation pipeline

use crate::error::FieldError;
use crate::formatter::Formatter;
use crate::loader::Loader;
use crate::validator::Validator;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Presentation hint for renderers. Validation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    TextArea,
    Password,
    Email,
    Checkbox,
    Button,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::TextArea => "textarea",
            FieldType::Password => "password",
            FieldType::Email => "email",
            FieldType::Checkbox => "checkbox",
            FieldType::Button => "button",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A frozen field definition, produced by [`FieldBuilder::build`](crate::FieldBuilder::build).
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) field_type: FieldType,
    pub(crate) required: bool,
    pub(crate) empty: Value,
    pub(crate) min: Option<i64>,
    pub(crate) max: Option<i64>,
    pub(crate) formatters: Vec<Formatter>,
    pub(crate) loader: Loader,
    pub(crate) validators: Vec<Validator>,
}

impl Field {
    /// Validate one raw input value.
    ///
    /// Order of work:
    /// 1. empty raw input short-circuits: `Required` error, or the empty default
    /// 2. formatters, in declaration order
    /// 3. loader; a parse failure stops here
    /// 4. validators, in declaration order; the first failure is returned
    pub fn validate(&self, raw: &str) -> Result<Value, FieldError> {
        if raw.is_empty() {
            if self.required {
                return Err(FieldError::Required {
                    label: self.display_label().to_string(),
                });
            }
            return Ok(self.empty.clone());
        }

        let formatted = self.format(raw);
        let value = self.loader.load(&formatted)?;
        for validator in &self.validators {
            validator.check(&value)?;
        }
        Ok(value)
    }

    fn format(&self, raw: &str) -> String {
        self.formatters
            .iter()
            .fold(raw.to_string(), |acc, formatter| formatter.format(&acc))
    }

    /// Name the field was registered under in its form (empty until added)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label for messages: the label, else the field name
    pub fn display_label(&self) -> &str {
        if !self.label.is_empty() {
            &self.label
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "Field"
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn empty(&self) -> &Value {
        &self.empty
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
