// Utilkit - helpers for a small web backend
// Server-side forms, text encryption, session cookies, mail composition,
// document storage, number/text formatting and logging setup.

pub mod config;
pub mod crypto;
pub mod document;
pub mod formatting;
pub mod logger;
pub mod mailer;
pub mod session;
pub mod store;

// Re-export the form framework and plain rules
pub use utilkit_forms as forms;
pub use utilkit_validation as validation;

pub use utilkit_forms::{
    FieldBuilder, FieldError, FieldType, Form, FormInput, FormResult, Formatter, Loader,
    Validator, Value,
};

// Re-export framework types
pub use config::Config;
pub use crypto::{decrypt, encrypt, CryptoError};
pub use logger::{LoggedError, Severity};
pub use mailer::{MailError, MailRequest, MailTransport, TemplateRenderer};
pub use session::{create_uuid, Cookie};
pub use store::{Collection, DocumentStore, MemoryStore, StoreError};
