//! Sign-in form values, the field-to-message error map, and validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::requests::LoginRequest;

/// Error map key for messages that belong to the whole form.
pub const GENERAL_ERROR_KEY: &str = "general";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Non-whitespace local part, `@`, non-whitespace domain, `.`, non-whitespace
/// suffix. Unanchored: a match anywhere in the input passes.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// An editable field of the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Email,
    Password,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Email, FormField::Password];

    /// Key used in the [`ErrorMap`].
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "email" => Some(FormField::Email),
            "password" => Some(FormField::Password),
            _ => None,
        }
    }
}

/// User-entered credentials.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for FormData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl FormData {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Field name (or [`GENERAL_ERROR_KEY`]) to human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        self.get(field.key())
    }

    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_ERROR_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set_field(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field.key().to_string(), message.into());
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.0.insert(GENERAL_ERROR_KEY.to_string(), message.into());
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(field.key());
    }

    pub fn clear_general(&mut self) {
        self.0.remove(GENERAL_ERROR_KEY);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Check the form and return every problem found. Empty means valid.
pub fn validate(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if data.email.is_empty() {
        errors.set_field(FormField::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&data.email) {
        errors.set_field(FormField::Email, EMAIL_INVALID);
    }

    if data.password.is_empty() {
        errors.set_field(FormField::Password, PASSWORD_REQUIRED);
    }

    errors
}

/// Sample account offered on the sign-in screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPersona {
    Hr,
    Candidate,
}

impl DemoPersona {
    pub const ALL: [DemoPersona; 2] = [DemoPersona::Hr, DemoPersona::Candidate];

    /// `"hr"` selects the HR account; any other tag the candidate account.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "hr" {
            DemoPersona::Hr
        } else {
            DemoPersona::Candidate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemoPersona::Hr => "HR",
            DemoPersona::Candidate => "Candidate",
        }
    }

    pub fn credentials(&self) -> FormData {
        match self {
            DemoPersona::Hr => FormData::new("hr@demo.com", "password"),
            DemoPersona::Candidate => FormData::new("candidate@demo.com", "password"),
        }
    }
}
