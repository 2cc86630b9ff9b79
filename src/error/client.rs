use thiserror::Error;

/// Reasons a registration request produced no usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Failed to build http client: {0}")]
    BuildError(String),

    #[error("Invalid registration endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to send registration request: {0}")]
    SendError(String),

    #[error("Registration request timed out: {0}")]
    Timeout(String),

    #[error("Failed to read registration response: {0}")]
    ReadBodyError(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout(e.to_string())
        } else if e.is_body() || e.is_decode() {
            ClientError::ReadBodyError(e.to_string())
        } else if e.is_builder() {
            ClientError::BuildError(e.to_string())
        } else {
            ClientError::SendError(e.to_string())
        }
    }
}
