pub mod log;
pub mod register;
pub mod session;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub use log::LoggingConfig;
pub use register::RegisterConfig;
pub use session::SessionConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub register: RegisterConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml_str(config_str: &str) -> crate::Result<Self> {
        let config: Config =
            toml::from_str(config_str).map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
        config.register.endpoint_url()?;
        if config.register.request_timeout_ms == Some(0) {
            return Err(err_with_loc!(ConfigError::InvalidValue(
                "register.request_timeout_ms must be positive, omit it to disable the timeout".to_string()
            )));
        }
        Ok(config)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(format!("{}: {}", path.display(), e))))?;
    Config::from_toml_str(&config_str)
}
