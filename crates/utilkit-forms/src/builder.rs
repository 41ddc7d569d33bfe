// File: src/builder.rs
// Purpose: Fluent construction of Field definitions

use crate::field::{Field, FieldType};
use crate::formatter::Formatter;
use crate::loader::Loader;
use crate::validator::Validator;
use crate::value::Value;

/// Accumulates field configuration.
///
/// Every setter returns the same builder so calls chain. Formatters and
/// validators append to what is already there. [`build`](Self::build) takes
/// a snapshot: changing the builder afterwards does not touch fields that
/// were already built.
///
/// # Example
///
/// ```
/// use utilkit_forms::{FieldBuilder, FieldType, Formatter, Loader, Validator};
///
/// let age = FieldBuilder::new()
///     .required()
///     .label("Age")
///     .field_type(FieldType::Text)
///     .with_formatter(Formatter::trim())
///     .loader(Loader::int())
///     .with_validator(Validator::range(18, 120, "Age must be between 18 and 120"))
///     .build();
///
/// assert!(age.validate("42").is_ok());
/// assert!(age.validate("12").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    formatters: Vec<Formatter>,
    loader: Option<Loader>,
    validators: Vec<Validator>,
    required: bool,
    empty: Value,
    label: String,
    min: Option<i64>,
    max: Option<i64>,
    field_type: FieldType,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatters<I>(&mut self, formatters: I) -> &mut Self
    where
        I: IntoIterator<Item = Formatter>,
    {
        self.formatters.extend(formatters);
        self
    }

    pub fn with_formatter(&mut self, formatter: Formatter) -> &mut Self {
        self.formatters.push(formatter);
        self
    }

    pub fn with_validators<I>(&mut self, validators: I) -> &mut Self
    where
        I: IntoIterator<Item = Validator>,
    {
        self.validators.extend(validators);
        self
    }

    pub fn with_validator(&mut self, validator: Validator) -> &mut Self {
        self.validators.push(validator);
        self
    }

    /// Without a loader the field keeps its raw text (`Loader::string`)
    pub fn loader(&mut self, loader: Loader) -> &mut Self {
        self.loader = Some(loader);
        self
    }

    pub fn required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    pub fn min(&mut self, value: i64) -> &mut Self {
        self.min = Some(value);
        self
    }

    pub fn max(&mut self, value: i64) -> &mut Self {
        self.max = Some(value);
        self
    }

    pub fn field_type(&mut self, field_type: FieldType) -> &mut Self {
        self.field_type = field_type;
        self
    }

    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Value returned for an empty, non-required input
    pub fn empty(&mut self, value: impl Into<Value>) -> &mut Self {
        self.empty = value.into();
        self
    }

    pub fn build(&self) -> Field {
        Field {
            name: String::new(),
            label: self.label.clone(),
            field_type: self.field_type,
            required: self.required,
            empty: self.empty.clone(),
            min: self.min,
            max: self.max,
            formatters: self.formatters.clone(),
            loader: self.loader.clone().unwrap_or_default(),
            validators: self.validators.clone(),
        }
    }
}
