// Utilkit Forms
// Declarative server-side form validation: each field runs
// formatters -> loader -> validators, and a form collects every field's
// outcome plus an optional cross-field check.

pub mod builder;
pub mod error;
pub mod field;
pub mod form;
pub mod formatter;
pub mod input;
pub mod loader;
pub mod validator;
pub mod value;

pub use builder::FieldBuilder;
pub use error::FieldError;
pub use field::{Field, FieldType};
pub use form::{Form, FormErrors, FormResult, FormValues};
pub use formatter::Formatter;
pub use input::{FormInput, InputSource};
pub use loader::{Loader, TimeLayout};
pub use validator::Validator;
pub use value::{Value, ValueKind};

// Re-export the plain rules so callers need only one dependency
pub use utilkit_validation as rules;
