use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::err_with_loc;
use crate::error::ClientError;

pub const DEFAULT_REGISTER_ENDPOINT: &str = "https://todo-app-wpbz.onrender.com/api/v1/user/register";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    pub endpoint: String,
    // None disables the client-side timeout
    pub request_timeout_ms: Option<u64>,
}

impl RegisterConfig {
    pub fn endpoint_url(&self) -> crate::Result<Url> {
        Url::parse(&self.endpoint)
            .map_err(|e| err_with_loc!(ClientError::InvalidEndpoint(format!("{}: {}", self.endpoint, e))))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REGISTER_ENDPOINT.to_string(),
            request_timeout_ms: Some(30_000),
        }
    }
}
