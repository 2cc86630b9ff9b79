use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::USERNAME_MAX_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Email,
    Password,
    Terms,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Username, Field::Email, Field::Password, Field::Terms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discrete edit coming from the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Username(String),
    Email(String),
    Password(String),
    Terms(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Username(_) => Field::Username,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Password(_) => Field::Password,
            FieldUpdate::Terms(_) => Field::Terms,
        }
    }
}

/// Current values of the registration form.
///
/// Records are never edited in place: [`RegisterForm::apply`] returns the next record, so a
/// submission that captured a snapshot keeps seeing the values it started with.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub terms: bool,
}

impl RegisterForm {
    #[must_use]
    pub fn apply(
        &self,
        update: FieldUpdate,
    ) -> Self {
        let mut next = self.clone();
        match update {
            // the input surface refuses characters past maxlength
            FieldUpdate::Username(value) => next.username = value.chars().take(USERNAME_MAX_LEN).collect(),
            FieldUpdate::Email(value) => next.email = value,
            FieldUpdate::Password(value) => next.password = value,
            FieldUpdate::Terms(value) => next.terms = value,
        }
        next
    }

    pub fn credentials_empty(&self) -> bool {
        self.username.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("terms", &self.terms)
            .finish()
    }
}
