//! Client-side rule set for the registration form.
//!
//! Every field is checked independently. The password rules form an ordered chain and only the
//! first failing rule is reported.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::*;
use crate::model::Advisory;
use crate::model::Field;
use crate::model::RegisterForm;
use crate::model::ValidationErrors;
use crate::model::ValidationReport;

// non-space@non-space.non-space, unanchored
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static regex"));

pub fn validate(form: &RegisterForm) -> ValidationReport {
    let mut errors = ValidationErrors::new();

    let advisory = form.credentials_empty().then_some(Advisory::EnterCredentials);

    if let Some(message) = username_error(&form.username) {
        errors.insert(Field::Username, message);
    }
    if let Some(message) = email_error(&form.email) {
        errors.insert(Field::Email, message);
    }
    if let Some(message) = password_error(&form.password) {
        errors.insert(Field::Password, message);
    }
    if !form.terms {
        errors.insert(Field::Terms, ERR_TERMS_REQUIRED);
    }

    ValidationReport { errors, advisory }
}

pub fn username_error(username: &str) -> Option<&'static str> {
    username.is_empty().then_some(ERR_USERNAME_REQUIRED)
}

pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(ERR_EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(email) {
        Some(ERR_EMAIL_INVALID)
    } else {
        None
    }
}

pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(ERR_PASSWORD_REQUIRED);
    }

    // counted like a browser string length, in UTF-16 units
    let len = password.encode_utf16().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Some(ERR_PASSWORD_LENGTH);
    }

    let rules: [(fn(char) -> bool, &'static str); 4] = [
        (|c| c.is_ascii_uppercase(), ERR_PASSWORD_UPPERCASE),
        (|c| c.is_ascii_lowercase(), ERR_PASSWORD_LOWERCASE),
        (|c| c.is_ascii_digit(), ERR_PASSWORD_NUMBER),
        (|c| PASSWORD_SPECIAL_CHARS.contains(&c), ERR_PASSWORD_SPECIAL),
    ];

    rules
        .iter()
        .find(|(matches, _)| !password.chars().any(*matches))
        .map(|(_, message)| *message)
}
