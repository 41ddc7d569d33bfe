//! Utilkit Validation
//!
//! Plain string rules used by the form validators and by handlers that want
//! to check a raw value without building a form. Every rule trims surrounding
//! whitespace before it looks at the text.

pub mod email;
pub mod messages;
pub mod numeric;
pub mod password;
pub mod patterns;
pub mod string;

// Re-export all rules
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
