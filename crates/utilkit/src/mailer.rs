// File: src/mailer.rs
// Purpose: Compose template-based mail and hand it to a transport

use crate::config::MailConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// MIME header block for HTML bodies, passed to [`MailRequest::send`]
pub const MIME_HTML: &str = "MIME-version: 1.0;\nContent-Type: text/html; charset=\"UTF-8\";\n\n";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Template pointer is not initialised.")]
    MissingTemplate,

    #[error("mail request has no recipients")]
    NoRecipients,

    #[error("failed to render template {name:?}: {source}")]
    Render {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to serialize template data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// Renders a named template with JSON data
pub trait TemplateRenderer {
    fn render(&self, name: &str, data: &serde_json::Value) -> anyhow::Result<String>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str, &serde_json::Value) -> anyhow::Result<String>,
{
    fn render(&self, name: &str, data: &serde_json::Value) -> anyhow::Result<String> {
        self(name, data)
    }
}

/// Everything an SMTP client needs to deliver one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// `host:port`
    pub server: String,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: Vec<String>,
    pub message: Vec<u8>,
}

/// Delivers a composed message
pub trait MailTransport {
    fn send(&self, envelope: &Envelope) -> Result<(), MailError>;
}

/// One outgoing mail: recipients, subject, rendered body and server settings
#[derive(Debug, Clone)]
pub struct MailRequest {
    to: Vec<String>,
    subject: String,
    body: String,
    server: String,
    port: u16,
    username: String,
    password: String,
}

impl MailRequest {
    pub fn new(to: Vec<String>, subject: impl Into<String>, config: &MailConfig) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: String::new(),
            server: config.server.clone(),
            port: config.port,
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render `name` with `data` into the body
    pub fn parse_template<T: Serialize + ?Sized>(
        &mut self,
        renderer: Option<&dyn TemplateRenderer>,
        name: &str,
        data: &T,
    ) -> Result<(), MailError> {
        let renderer = renderer.ok_or(MailError::MissingTemplate)?;
        let data = serde_json::to_value(data)?;

        self.body = renderer
            .render(name, &data)
            .map_err(|source| MailError::Render {
                name: name.to_string(),
                source,
            })?;
        Ok(())
    }

    /// Raw message text: headers for the first recipient, the MIME block, then the body
    pub fn compose(&self, mime: &str) -> Result<String, MailError> {
        let first = self.to.first().ok_or(MailError::NoRecipients)?;
        Ok(format!(
            "To: {}\r\nSubject: {}\r\n{}\r\n{}",
            first, self.subject, mime, self.body
        ))
    }

    pub fn envelope(&self, mime: &str) -> Result<Envelope, MailError> {
        let message = self.compose(mime)?;
        Ok(Envelope {
            server: format!("{}:{}", self.server, self.port),
            username: self.username.clone(),
            password: self.password.clone(),
            from: self.username.clone(),
            to: self.to.clone(),
            message: message.into_bytes(),
        })
    }

    pub fn send_mail(&self, transport: &dyn MailTransport, mime: &str) -> Result<(), MailError> {
        let envelope = self.envelope(mime)?;
        debug!(server = %envelope.server, recipients = envelope.to.len(), "sending mail");

        transport.send(&envelope).inspect_err(|err| {
            warn!(server = %envelope.server, "mail delivery failed: {}", err);
        })
    }

    /// Render the template, then deliver
    pub fn send<T: Serialize + ?Sized>(
        &mut self,
        transport: &dyn MailTransport,
        renderer: Option<&dyn TemplateRenderer>,
        template: &str,
        mime: &str,
        data: &T,
    ) -> Result<(), MailError> {
        self.parse_template(renderer, template, data)?;
        self.send_mail(transport, mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<Envelope>>,
        reject_user: Option<String>,
    }

    impl MailTransport for RecordingTransport {
        fn send(&self, envelope: &Envelope) -> Result<(), MailError> {
            if self.reject_user.as_deref() == Some(envelope.username.as_str()) {
                return Err(MailError::Transport("535 authentication failed".into()));
            }
            self.sent.borrow_mut().push(envelope.clone());
            Ok(())
        }
    }

    fn renderer(name: &str, data: &serde_json::Value) -> anyhow::Result<String> {
        match name {
            "account_verification" => Ok(format!(
                "<p>Hi {}, verify at {}</p>",
                data["Name"].as_str().unwrap_or_default(),
                data["URL"].as_str().unwrap_or_default()
            )),
            other => anyhow::bail!("no template named {other}"),
        }
    }

    fn config() -> MailConfig {
        MailConfig {
            server: "smtp.example.com".into(),
            port: 587,
            username: "noreply@example.com".into(),
            password: "secret".into(),
        }
    }

    fn data() -> HashMap<&'static str, &'static str> {
        HashMap::from([("URL", "http://abc.com"), ("Name", "Richa")])
    }

    fn request() -> MailRequest {
        MailRequest::new(vec!["richa@example.com".into()], "Test Mail", &config())
    }

    #[test]
    fn test_missing_renderer() {
        let transport = RecordingTransport::default();
        let err = request()
            .send(&transport, None, "account_verification", MIME_HTML, &data())
            .unwrap_err();

        assert!(matches!(err, MailError::MissingTemplate));
        assert_eq!(err.to_string(), "Template pointer is not initialised.");
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_send_builds_envelope() {
        let transport = RecordingTransport::default();
        let mut mail = request();
        mail.send(&transport, Some(&renderer), "account_verification", MIME_HTML, &data())
            .unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let envelope = &sent[0];
        assert_eq!(envelope.server, "smtp.example.com:587");
        assert_eq!(envelope.from, "noreply@example.com");
        assert_eq!(envelope.to, vec!["richa@example.com".to_string()]);
        assert_eq!(
            String::from_utf8(envelope.message.clone()).unwrap(),
            format!(
                "To: richa@example.com\r\nSubject: Test Mail\r\n{}\r\n<p>Hi Richa, verify at http://abc.com</p>",
                MIME_HTML
            )
        );
    }

    #[test]
    fn test_transport_failure_is_returned() {
        let transport = RecordingTransport {
            reject_user: Some("noreply@example.com".into()),
            ..Default::default()
        };
        let err = request()
            .send(&transport, Some(&renderer), "account_verification", MIME_HTML, &data())
            .unwrap_err();
        assert!(matches!(err, MailError::Transport(_)));
    }

    #[test]
    fn test_unknown_template() {
        let err = request()
            .parse_template(Some(&renderer), "welcome", &data())
            .unwrap_err();
        assert!(matches!(err, MailError::Render { ref name, .. } if name == "welcome"));
    }

    #[test]
    fn test_no_recipients() {
        let mail = MailRequest::new(Vec::new(), "Empty", &config());
        assert!(matches!(mail.compose(MIME_HTML), Err(MailError::NoRecipients)));
    }
}
