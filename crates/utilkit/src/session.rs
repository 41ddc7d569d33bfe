// File: src/session.rs
// Purpose: Session identifiers and cookie values

use crate::config::SessionConfig;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Random (v4) session identifier
pub fn create_uuid() -> Uuid {
    Uuid::new_v4()
}

/// A cookie to hand to the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub http_only: bool,
    pub secure: bool,
    pub path: String,
    pub domain: String,
}

impl Cookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        http_only: bool,
        secure: bool,
        path: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            http_only,
            secure,
            path: path.into(),
            domain: domain.into(),
        }
    }

    /// Cookie carrying `value` with the configured session defaults
    pub fn session(config: &SessionConfig, value: impl Into<String>) -> Self {
        Self::new(
            config.cookie_name.as_str(),
            value,
            config.http_only,
            config.secure,
            config.path.as_str(),
            config.domain.as_str(),
        )
    }

    /// Session cookie holding a fresh random identifier
    pub fn new_session(config: &SessionConfig) -> Self {
        Self::session(config, create_uuid().to_string())
    }
}

/// Renders the value of a `Set-Cookie` header
impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if !self.path.is_empty() {
            write!(f, "; Path={}", self.path)?;
        }
        if !self.domain.is_empty() {
            write!(f, "; Domain={}", self.domain)?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        Ok(())
    }
}

/// Parse cookies from a `Cookie` request header
pub fn parse_cookie_header(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for cookie in header.split(';') {
        let cookie = cookie.trim();
        if let Some((key, value)) = cookie.split_once('=') {
            cookies.insert(key.to_string(), value.to_string());
        }
    }

    cookies
}
