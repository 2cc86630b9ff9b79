use std::time::Duration;

/// A single user-facing status line that disappears on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: String,
    pub expires_after: Duration,
}

impl TransientMessage {
    pub fn new(
        text: impl Into<String>,
        expires_after: Duration,
    ) -> Self {
        Self {
            text: text.into(),
            expires_after,
        }
    }
}
