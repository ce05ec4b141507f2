use std::{env, path::PathBuf};

use dotenv::dotenv;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port \"{0}\"")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_config: PathBuf,
    pub allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            allowed_origin: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment, after loading
    /// `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("CALORIE_API_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("CALORIE_API_HOST").unwrap_or(defaults.host),
            port,
            log_config: lookup("CALORIE_API_LOG_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            allowed_origin: lookup("CALORIE_API_ALLOWED_ORIGIN").filter(|o| !o.is_empty()),
        })
    }
}
