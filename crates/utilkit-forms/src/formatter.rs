// File: src/formatter.rs
// Purpose: String normalisation applied before a field's loader runs

use std::fmt;
use std::sync::Arc;

/// Pure string-to-string transform. Formatters cannot fail.
#[derive(Clone)]
pub struct Formatter(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Formatter {
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(format))
    }

    /// Strip leading and trailing whitespace
    pub fn trim() -> Self {
        Self::new(|raw| raw.trim().to_string())
    }

    pub fn lowercase() -> Self {
        Self::new(str::to_lowercase)
    }

    pub fn uppercase() -> Self {
        Self::new(str::to_uppercase)
    }

    /// Replace every run of whitespace with a single space and trim the ends
    pub fn collapse_whitespace() -> Self {
        Self::new(|raw| raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn format(&self, raw: &str) -> String {
        (self.0)(raw)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_formatters() {
        assert_eq!(Formatter::trim().format("  a b \n"), "a b");
        assert_eq!(Formatter::lowercase().format("MiXeD"), "mixed");
        assert_eq!(Formatter::uppercase().format("MiXeD"), "MIXED");
        assert_eq!(
            Formatter::collapse_whitespace().format("  Richa \t  Chawla \n"),
            "Richa Chawla"
        );
    }

    #[test]
    fn test_custom_formatter() {
        let digits_only = Formatter::new(|raw| raw.chars().filter(char::is_ascii_digit).collect());
        assert_eq!(digits_only.format("(555) 010-9999"), "5550109999");
    }
}
