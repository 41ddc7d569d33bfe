/// A signup handler wired from the facade crate: config, form validation,
/// encryption of a secret, session cookie, confirmation mail and the
/// update document for storage.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use utilkit::config::Config;
use utilkit::store::ID_KEY;
use utilkit::forms::rules::messages::{INVALID_EMAIL, INVALID_NAME, INVALID_PASSWORD};
use utilkit::mailer::{Envelope, MIME_HTML};
use utilkit::session::parse_cookie_header;
use utilkit::{
    decrypt, encrypt, Collection, Cookie, FieldBuilder, Form, FormInput, Formatter, MailError,
    MailRequest, MailTransport, MemoryStore, Validator, Value,
};

const CONFIG: &str = r#"
[mail]
server = "smtp.example.com"
port = 2525
username = "noreply@example.com"
password = "hunter2"

[session]
cookie_name = "sid"
secure = true
"#;

#[derive(Default)]
struct Outbox(RefCell<Vec<Envelope>>);

impl MailTransport for Outbox {
    fn send(&self, envelope: &Envelope) -> Result<(), MailError> {
        self.0.borrow_mut().push(envelope.clone());
        Ok(())
    }
}

fn signup_form() -> Form {
    let mut form = Form::with_metadata("signup_", "", "/signup", "POST");
    form.with_field(
        "Name",
        FieldBuilder::new()
            .required()
            .with_formatter(Formatter::collapse_whitespace())
            .with_validator(Validator::name(INVALID_NAME)),
    )
    .with_field(
        "Email",
        FieldBuilder::new()
            .required()
            .with_formatters([Formatter::trim(), Formatter::lowercase()])
            .with_validator(Validator::email(INVALID_EMAIL)),
    )
    .with_field(
        "Password",
        FieldBuilder::new()
            .required()
            .with_validator(Validator::password(INVALID_PASSWORD)),
    );
    form
}

#[test]
fn test_signup_flow() {
    let config = Config::from_toml_str(CONFIG).unwrap();
    let input = FormInput::parse(
        "signup_Name=Richa++Chawla&signup_Email=+Programmer.Richa%40Gmail.com&signup_Password=Uu1%3F1234",
    )
    .unwrap();

    let result = signup_form().validate(&input);
    assert!(result.is_valid(), "errors: {:?}", result.error_messages());
    assert_eq!(result.value("Name"), Some(&Value::from("Richa Chawla")));
    assert_eq!(
        result.value("Email"),
        Some(&Value::from("programmer.richa@gmail.com"))
    );

    // secrets are stored encrypted
    let password = result.value("Password").and_then(Value::as_str).unwrap();
    let sealed = encrypt(password, "server-side passphrase").unwrap();
    assert_ne!(sealed, password);
    assert_eq!(decrypt(&sealed, "server-side passphrase").unwrap(), password);

    let store = MemoryStore::new();
    let users = Collection::new(&store, "users");
    let mut values = result.values.clone();
    values.insert("Password".to_string(), Value::from(sealed));
    let id = users.insert(&values).unwrap();

    let mut changes = result.values.clone();
    changes.insert("Name".to_string(), Value::from("Richa C"));
    changes.insert("Password".to_string(), Value::Null);
    users.update(&id, &changes).unwrap();

    let stored = users.find(&id).unwrap().unwrap();
    assert_eq!(stored[ID_KEY], id.as_str());
    assert_eq!(stored["Name"], "Richa C");
    assert_eq!(stored["Email"], "programmer.richa@gmail.com");
    let stored_password = stored["Password"].as_str().unwrap();
    assert_eq!(decrypt(stored_password, "server-side passphrase").unwrap(), password);

    let cookie = Cookie::new_session(&config.session);
    let header = cookie.to_string();
    assert!(header.starts_with("sid="));
    assert!(header.ends_with("; HttpOnly; Secure"));
    let echoed = parse_cookie_header(&format!("sid={}", cookie.value));
    assert_eq!(echoed.get("sid"), Some(&cookie.value));

    let outbox = Outbox::default();
    let renderer = |_: &str, data: &serde_json::Value| -> anyhow::Result<String> {
        Ok(format!("Welcome, {}", data["Name"].as_str().unwrap_or_default()))
    };
    let email = result.value("Email").and_then(Value::as_str).unwrap();
    MailRequest::new(vec![email.to_string()], "Welcome", &config.mail)
        .send(&outbox, Some(&renderer), "welcome", MIME_HTML, &result.values)
        .unwrap();

    let sent = outbox.0.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].server, "smtp.example.com:2525");
    assert!(String::from_utf8_lossy(&sent[0].message).ends_with("Welcome, Richa Chawla"));
}

#[test]
fn test_rejected_signup_is_not_stored() {
    let input = FormInput::parse("signup_Name=Abc&signup_Email=nope&signup_Password=short").unwrap();
    let result = signup_form().validate(&input);

    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 3);
    assert_eq!(result.error("Name").map(ToString::to_string).as_deref(), Some(INVALID_NAME));
    assert!(result.values.is_empty());
}
