//! Host settings read from the environment.
//!
//! | Env var                 | Default                         |
//! |-------------------------|---------------------------------|
//! | `ADMIN_HOST`            | `127.0.0.1`                     |
//! | `ADMIN_PORT`            | `8080`                          |
//! | `ADMIN_API_BASE_URL`    | `http://localhost:5000`         |
//! | `ADMIN_STATIC_BASE_URL` | value of `ADMIN_API_BASE_URL`   |
//! | `ADMIN_OPEN_BROWSER`    | `true`                          |

use common::config::{AppConfig, DEFAULT_BASE_URL};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got `{value}`")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got `{value}`")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got `{value}`")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Served to the browser bundle as `/config.json`.
    pub app: AppConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

        let host = get("ADMIN_HOST").unwrap_or_else(|| "127.0.0.1".into());

        let port = match get("ADMIN_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: "ADMIN_PORT",
                value,
            })?,
            None => 8080,
        };

        let open_browser = match get("ADMIN_OPEN_BROWSER") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                var: "ADMIN_OPEN_BROWSER",
                value,
            })?,
            None => true,
        };

        let api_base_url = match get("ADMIN_API_BASE_URL") {
            Some(value) => checked_url("ADMIN_API_BASE_URL", value)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let mut app = AppConfig::new(api_base_url);
        if let Some(value) = get("ADMIN_STATIC_BASE_URL") {
            app = app.with_static_base_url(checked_url("ADMIN_STATIC_BASE_URL", value)?);
        }

        Ok(Self {
            host,
            port,
            open_browser,
            app,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn checked_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}
