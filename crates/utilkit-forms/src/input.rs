// File: src/input.rs
// Purpose: Sources of raw submitted values, keyed by (prefixed) field name

use std::collections::{BTreeMap, HashMap};
use std::string::FromUtf8Error;

/// Anything a form can read raw values from.
///
/// When a key was submitted several times, `raw_value` returns the first one.
pub trait InputSource {
    fn raw_value(&self, key: &str) -> Option<&str>;
}

impl InputSource for HashMap<String, String> {
    fn raw_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl InputSource for BTreeMap<String, String> {
    fn raw_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl InputSource for HashMap<String, Vec<String>> {
    fn raw_value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|values| values.first()).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> InputSource for [(K, V)] {
    fn raw_value(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> InputSource for [(K, V); N] {
    fn raw_value(&self, key: &str) -> Option<&str> {
        InputSource::raw_value(self.as_slice(), key)
    }
}

/// Submitted form values, possibly several per key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: HashMap<String, Vec<String>>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// `+` decodes to a space and percent escapes are decoded; pairs without
    /// `=` are read as a key with an empty value.
    pub fn parse(body: &str) -> Result<Self, FromUtf8Error> {
        let mut input = Self::new();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            input.append(decode_component(key)?, decode_component(value)?);
        }
        Ok(input)
    }

    /// Add a value after any already present for `key`
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw_value(key)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&String> {
        self.fields.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn decode_component(raw: &str) -> Result<String, FromUtf8Error> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map(|decoded| decoded.into_owned())
}

impl InputSource for FormInput {
    fn raw_value(&self, key: &str) -> Option<&str> {
        self.fields.raw_value(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = Self::new();
        for (key, value) in iter {
            input.append(key, value);
        }
        input
    }
}

impl From<HashMap<String, String>> for FormInput {
    fn from(fields: HashMap<String, String>) -> Self {
        fields.into_iter().collect()
    }
}
