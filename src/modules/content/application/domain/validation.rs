//! Typed parsing of raw admin/public form submissions.
//!
//! Every record type implements [`FromForm`] on its draft, reading fields
//! through a [`FieldReader`] that collects all failures before giving up.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// Raw key/value pairs of a submitted form. Missing keys are allowed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormInput(HashMap<String, String>);

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.0.insert(field.to_string(), value.to_string());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Field name -> messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

pub trait FromForm: Sized {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors>;
}

/// Reads fields from a [`FormInput`], accumulating errors.
///
/// Readers never short-circuit: a failing field yields a placeholder value
/// and the error is reported by [`FieldReader::finish`].
pub struct FieldReader<'a> {
    input: &'a FormInput,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(input: &'a FormInput) -> Self {
        Self {
            input,
            errors: ValidationErrors::default(),
        }
    }

    fn trimmed(&self, field: &str) -> Option<&'a str> {
        self.input
            .get(field)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Non-blank string, trimmed.
    pub fn required(&mut self, field: &str, message: &str) -> String {
        match self.trimmed(field) {
            Some(value) => value.to_string(),
            None => {
                self.errors.add(field, message);
                String::new()
            }
        }
    }

    /// Trimmed string, blank or absent becomes `None`.
    pub fn optional(&self, field: &str) -> Option<String> {
        self.trimmed(field).map(str::to_string)
    }

    /// Comma separated list: `"A, B ,, C"` -> `["A", "B", "C"]`.
    pub fn list(&self, field: &str) -> Vec<String> {
        self.input
            .get(field)
            .map(split_list)
            .unwrap_or_default()
    }

    /// HTML checkbox semantics: only the literal `"on"` is checked.
    pub fn checkbox(&self, field: &str) -> bool {
        self.input.get(field) == Some("on")
    }

    /// Integer with blank/absent defaulting to 0.
    pub fn integer(&mut self, field: &str) -> i32 {
        let Some(raw) = self.trimmed(field) else {
            return 0;
        };

        match raw.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.errors.add(field, "Expected a whole number");
                0
            }
        }
    }

    /// Exact, case-sensitive match against `T`'s accepted spellings.
    pub fn one_of<T>(&mut self, field: &str, message: &str) -> T
    where
        T: FromStr + Default,
    {
        match self.input.get(field).and_then(|v| v.parse::<T>().ok()) {
            Some(value) => value,
            None => {
                self.errors.add(field, message);
                T::default()
            }
        }
    }

    /// Trimmed, syntactically valid email address.
    pub fn email(&mut self, field: &str, message: &str) -> String {
        match self.trimmed(field) {
            Some(value) if EmailAddress::is_valid(value) => value.to_string(),
            _ => {
                self.errors.add(field, message);
                String::new()
            }
        }
    }

    pub fn raw(&self, field: &str) -> Option<&'a str> {
        self.input.get(field)
    }

    pub fn reject(&mut self, field: &str, message: &str) {
        self.errors.add(field, message);
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
