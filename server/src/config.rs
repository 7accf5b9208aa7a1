//! Server configuration read from the environment.

use std::time::Duration;

use thiserror::Error;

pub const HOST_KEY: &str = "TODO_HOST";
pub const PORT_KEY: &str = "PORT";
pub const REQUEST_TIMEOUT_KEY: &str = "REQUEST_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Requests still running after this long are answered with 408.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys fall back to defaults;
    /// set but unparsable keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_KEY) {
            if host.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: HOST_KEY,
                    value: host,
                });
            }
            config.host = host;
        }
        if let Some(port) = lookup(PORT_KEY) {
            config.port = parse(PORT_KEY, port)?;
        }
        if let Some(secs) = lookup(REQUEST_TIMEOUT_KEY) {
            let secs: u64 = parse(REQUEST_TIMEOUT_KEY, secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
