//! Host configuration parsed from environment variables.
//!
//! `main` loads `.env` with `dotenvy` before calling [`ServerConfig::from_env`],
//! so a local file and the real environment feed the same keys.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// The backend base URL is not an absolute http(s) URL.
    #[error("BRISK_API_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    /// The shared upstream HTTP client could not be built.
    #[error("http client build failed: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    pub timeouts: ProxyTimeouts,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BRISK_API_BASE_URL`: default `http://localhost:8000`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to something unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", value("PORT"), DEFAULT_PORT)?;
        let api_base_url = parse_base_url(value("BRISK_API_BASE_URL").as_deref().unwrap_or(DEFAULT_API_BASE_URL))?;
        let timeouts = ProxyTimeouts {
            request_secs: parse_or("PROXY_TIMEOUT_SECS", value("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "PROXY_CONNECT_TIMEOUT_SECS",
                value("PROXY_CONNECT_TIMEOUT_SECS"),
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, api_base_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let has_host = |rest: &str| !rest.is_empty() && !rest.starts_with('/');
    match trimmed.split_once("://") {
        Some(("http" | "https", rest)) if has_host(rest) => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
