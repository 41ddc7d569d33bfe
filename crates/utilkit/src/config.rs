// File: src/config.rs
// Purpose: Configuration parsing from utilkit.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Outgoing mail server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MailConfig {
    #[serde(default = "default_mail_server")]
    pub server: String,

    #[serde(default = "default_mail_port")]
    pub port: u16,

    /// Also used as the sender address
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Session cookie defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    #[serde(default = "default_cookie_path")]
    pub path: String,

    #[serde(default)]
    pub domain: String,

    #[serde(default = "default_true")]
    pub http_only: bool,

    #[serde(default = "default_false")]
    pub secure: bool,
}

/// Tracing setup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "utilkit=debug,warn"
    #[serde(default = "default_filter")]
    pub filter: String,
}

// Default values
fn default_mail_server() -> String {
    "localhost".to_string()
}

fn default_mail_port() -> u16 {
    587
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

// Default implementations
impl Default for MailConfig {
    fn default() -> Self {
        Self {
            server: default_mail_server(),
            port: default_mail_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            path: default_cookie_path(),
            domain: String::new(),
            http_only: true,
            secure: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./utilkit.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("utilkit.toml")
    }

    /// Parse configuration text; blank text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }
}
