//! Credential validation for the login and register forms.
//!
//! Pure functions over the input records producing a field -> message map;
//! an empty map means the form may be submitted. Per-field clearing on edit
//! is the input component's job and is independent of re-validation.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

use crate::net::types::{LoginData, RegisterData};

/// Map from field name to a human-readable message. Recomputed on every
/// submit attempt; cleared per-field as the user edits that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// No errors: the form is valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for one field, if it failed.
    pub fn message(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop one field's error, e.g. when the user edits that field.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }
}

/// Login rules: email required and email-shaped; password required.
pub fn validate_login(data: &LoginData) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if data.email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(&data.email) {
        errors.insert("email", "Enter a valid email address");
    }
    if data.password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

/// Registration rules: names and email required, username at least 3
/// characters, password at least 6, confirmation matching.
pub fn validate_register(data: &RegisterData, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if data.first_name.as_deref().unwrap_or("").is_empty() {
        errors.insert("first_name", "First name is required");
    }
    if data.last_name.as_deref().unwrap_or("").is_empty() {
        errors.insert("last_name", "Last name is required");
    }
    if data.email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(&data.email) {
        errors.insert("email", "Enter a valid email address");
    }
    if data.username.is_empty() {
        errors.insert("username", "Username is required");
    } else if data.username.chars().count() < 3 {
        errors.insert("username", "Must be at least 3 characters");
    }
    if data.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if data.password.chars().count() < 6 {
        errors.insert("password", "Must be at least 6 characters");
    }
    if data.password != confirm_password {
        errors.insert("confirm_password", "Passwords do not match");
    }
    errors
}

/// Basic `local@domain.tld` shape: something before the `@`, a dot-separated
/// domain after it, no whitespace anywhere.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
