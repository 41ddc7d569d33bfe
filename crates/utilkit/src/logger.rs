// File: src/logger.rs
// Purpose: Severity-based error reporting on top of tracing

use crate::config::LoggingConfig;
use std::error::Error as StdError;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// How an application error should be handled once reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Log, then panic
    Panic,
    /// Log at error level and carry on
    Error,
    /// Informational
    Message,
    /// Log, then terminate the process
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Panic => "panic",
            Severity::Error => "error",
            Severity::Message => "message",
            Severity::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

/// An error message tagged with the severity it should be reported at
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoggedError {
    pub message: String,
    pub severity: Severity,
}

impl LoggedError {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Report this error at its own severity
    pub fn report(&self) {
        log(self.severity, self);
    }
}

/// Report `err` according to `severity`.
///
/// `Panic` and `Fatal` do not return.
pub fn log(severity: Severity, err: &(dyn StdError + 'static)) {
    match severity {
        Severity::Message => tracing::info!("{}", err),
        Severity::Error => tracing::error!(error = %err, "application error"),
        Severity::Panic => {
            tracing::error!(error = %err, "panicking on application error");
            panic!("{}", err);
        }
        Severity::Fatal => {
            tracing::error!(error = %err, "fatal application error, exiting");
            std::process::exit(1);
        }
    }
}

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to the
/// configured filter.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
