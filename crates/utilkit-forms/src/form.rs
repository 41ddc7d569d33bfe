// File: src/form.rs
// Purpose: Ordered collection of fields, validated together per submission

use crate::builder::FieldBuilder;
use crate::error::FieldError;
use crate::field::Field;
use crate::input::InputSource;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Decoded values by field name
pub type FormValues = HashMap<String, Value>;

/// Field errors by field name
pub type FormErrors = HashMap<String, FieldError>;

type FormValidator = Arc<dyn Fn(&FormValues) -> bool + Send + Sync>;

/// Outcome of one [`Form::validate`] call.
///
/// Exactly one of `values` / `errors` carries data: values when the form is
/// valid, errors otherwise. A form rejected only by its whole-form validator
/// is invalid with `errors` empty and `rejected_by_form` set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormResult {
    pub valid: bool,
    pub values: FormValues,
    pub errors: FormErrors,
    pub rejected_by_form: bool,
}

impl FormResult {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Error messages by field name, ready for a template
    pub fn error_messages(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .map(|(name, err)| (name.clone(), err.to_string()))
            .collect()
    }

    /// The decoded values if the form passed
    pub fn ok(self) -> Option<FormValues> {
        self.valid.then_some(self.values)
    }
}

/// A server-side form definition.
///
/// Build it once (usually at startup), then call [`validate`](Self::validate)
/// for each submission. Validation never mutates the form, so one instance
/// can be shared across threads.
#[derive(Clone, Default)]
pub struct Form {
    fields: HashMap<String, Field>,
    field_names: Vec<String>,
    validator: Option<FormValidator>,
    prefix: String,
    encrypt_type: String,
    action: String,
    method: String,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("prefix", &self.prefix)
            .field("field_names", &self.field_names)
            .field("has_validator", &self.validator.is_some())
            .field("action", &self.action)
            .field("method", &self.method)
            .finish()
    }
}

impl Form {
    /// Create a form whose inputs are read as `prefix + field name`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Create a form with its presentation metadata in one go
    pub fn with_metadata(
        prefix: impl Into<String>,
        encrypt_type: impl Into<String>,
        action: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            encrypt_type: encrypt_type.into(),
            action: action.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    /// Add the field built from `builder` under `name`.
    ///
    /// Adding a name twice replaces the earlier field but keeps its place in
    /// the validation order.
    pub fn with_field(&mut self, name: impl Into<String>, builder: &FieldBuilder) -> &mut Self {
        let name = name.into();
        let field = builder.build().with_name(&name);
        if self.fields.insert(name.clone(), field).is_none() {
            self.field_names.push(name);
        }
        self
    }

    /// Set the whole-form check, run only when every field passed.
    ///
    /// It answers pass/fail; a failure produces no field error.
    pub fn with_validator<F>(&mut self, validator: F) -> &mut Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_encrypt_type(&mut self, encrypt_type: impl Into<String>) -> &mut Self {
        self.encrypt_type = encrypt_type.into();
        self
    }

    pub fn with_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.action = action.into();
        self
    }

    pub fn with_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    /// Validate every field against `input`, then the whole-form check.
    ///
    /// A missing key reads as an empty string. Field failures do not stop
    /// the pass, so the result holds an error for every failing field.
    pub fn validate<S>(&self, input: &S) -> FormResult
    where
        S: InputSource + ?Sized,
    {
        let mut values = FormValues::new();
        let mut errors = FormErrors::new();

        for (name, field) in self.fields() {
            let key = self.input_name(name);
            let raw = input.raw_value(&key).unwrap_or("");
            match field.validate(raw) {
                Ok(value) => {
                    tracing::trace!(field = %name, "field accepted");
                    values.insert(name.to_string(), value);
                }
                Err(err) => {
                    tracing::trace!(field = %name, error = %err, "field rejected");
                    errors.insert(name.to_string(), err);
                }
            }
        }

        let rejected_by_form = errors.is_empty()
            && self
                .validator
                .as_ref()
                .is_some_and(|validator| !validator(&values));

        let valid = errors.is_empty() && !rejected_by_form;
        tracing::debug!(
            prefix = %self.prefix,
            valid,
            field_errors = errors.len(),
            rejected_by_form,
            "form validated"
        );

        if valid {
            FormResult {
                valid,
                values,
                errors: FormErrors::new(),
                rejected_by_form,
            }
        } else {
            FormResult {
                valid,
                values: FormValues::new(),
                errors,
                rejected_by_form,
            }
        }
    }

    /// Key a field's raw value is read from
    pub fn input_name(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> + '_ {
        self.field_names
            .iter()
            .filter_map(|name| self.fields.get(name).map(|field| (name.as_str(), field)))
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn len(&self) -> usize {
        self.field_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_names.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn encrypt_type(&self) -> &str {
        &self.encrypt_type
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Loader;
    use crate::validator::Validator;
    use pretty_assertions::assert_eq;

    fn pin_form() -> Form {
        let mut form = Form::new("");
        form.with_field(
            "Pin",
            FieldBuilder::new()
                .required()
                .label("PIN")
                .loader(Loader::int())
                .with_validator(Validator::range(1000, 9999, "PIN must have four digits")),
        )
        .with_field("Note", FieldBuilder::new().empty("none"));
        form
    }

    #[test]
    fn test_missing_key_reads_as_empty() {
        let result = pin_form().validate(&[("Other", "1")]);
        assert!(!result.is_valid());
        assert_eq!(result.error("Pin").unwrap().to_string(), "PIN is required");
        assert!(result.error("Note").is_none());
        assert!(result.values.is_empty());
    }

    #[test]
    fn test_valid_form_exposes_values_only() {
        let result = pin_form().validate(&[("Pin", "1234")]);
        assert!(result.is_valid());
        assert_eq!(result.value("Pin"), Some(&Value::Int(1234)));
        assert_eq!(result.value("Note"), Some(&Value::from("none")));
        assert!(!result.has_errors());
        assert!(!result.rejected_by_form);
    }

    #[test]
    fn test_prefix_is_applied_to_lookups() {
        let mut form = Form::with_metadata("registration", "", "/registration", "POST");
        form.with_field("Name", FieldBuilder::new().required());

        assert_eq!(form.input_name("Name"), "registrationName");
        assert!(form.validate(&[("registrationName", "Neo")]).is_valid());

        let result = form.validate(&[("Name", "Neo")]);
        assert!(result.error("Name").unwrap().is_required());
    }

    #[test]
    fn test_readding_a_field_replaces_it_in_place() {
        let mut form = Form::new("");
        form.with_field("A", FieldBuilder::new().required())
            .with_field("B", &FieldBuilder::new())
            .with_field("A", FieldBuilder::new().label("Again"));

        assert_eq!(form.field_names(), ["A", "B"]);
        assert_eq!(form.field("A").unwrap().label(), "Again");
        assert!(form.validate(&[("B", "x")]).is_valid());
    }

    #[test]
    fn test_form_validator_runs_only_when_fields_pass() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut form = pin_form();
        form.with_validator(move |_| {
            seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            true
        });

        assert!(!form.validate(&[("Pin", "12")]).is_valid());
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);

        assert!(form.validate(&[("Pin", "1234")]).is_valid());
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_form_validator_rejection_has_no_field_errors() {
        let mut form = pin_form();
        form.with_validator(|values| values.get("Note") != Some(&Value::from("none")));

        let result = form.validate(&[("Pin", "1234")]);
        assert!(!result.is_valid());
        assert!(result.rejected_by_form);
        assert!(result.errors.is_empty());
        assert!(result.values.is_empty());
        assert_eq!(result.clone().ok(), None);
    }

    #[test]
    fn test_fields_iterate_in_declaration_order() {
        let form = pin_form();
        let names: Vec<&str> = form.fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["Pin", "Note"]);
        assert_eq!(form.len(), 2);
        assert_eq!(form.field("Pin").unwrap().name(), "Pin");
    }

    #[test]
    fn test_metadata() {
        let mut form = Form::new("login");
        form.with_action("/login")
            .with_method("POST")
            .with_encrypt_type("multipart/form-data");
        assert_eq!(form.prefix(), "login");
        assert_eq!(form.action(), "/login");
        assert_eq!(form.method(), "POST");
        assert_eq!(form.encrypt_type(), "multipart/form-data");
        assert!(form.is_empty());
    }
}
