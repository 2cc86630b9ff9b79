use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // How long a transient message stays visible
    pub message_ttl_ms: u64,
    // Delay between a successful registration and the dashboard redirect
    pub redirect_delay_ms: u64,
}

impl SessionConfig {
    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            message_ttl_ms: 3000,
            redirect_delay_ms: 1000,
        }
    }
}
