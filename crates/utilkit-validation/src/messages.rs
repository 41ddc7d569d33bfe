//! Canned error messages used as defaults by the form validators

pub const INVALID_STRING: &str = "Enter a string value.";
pub const INVALID_INTEGER: &str = "Enter an integer value.";
pub const INVALID_NAME: &str = "Name must be at least 5 characters.";
pub const INVALID_PASSWORD: &str = "Password must be at least 8 characters.";
pub const INVALID_EMAIL: &str = "Invalid email address.";
