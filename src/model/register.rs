use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::form::RegisterForm;
use crate::error::ClientError;

/// JSON body posted to the registration endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl From<&RegisterForm> for RegisterRequest {
    fn from(form: &RegisterForm) -> Self {
        Self {
            email: form.email.clone(),
            name: form.username.clone(),
            password: form.password.clone(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The only part of the server's reply this crate reads. Everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// Bodies that are empty, not JSON, or carry a non-string `message` become an empty response.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// What came back from one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterResult {
    Success { body: RegisterResponse },
    ServerRejected { status: u16, body: RegisterResponse },
    TransportFailure { cause: ClientError },
}
