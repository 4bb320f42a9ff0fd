//! Host configuration parsed from environment variables.

use client::config::{ClientConfig, DEFAULT_API_URL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("LEASA_API_URL must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the listing/chat backend, without a trailing slash.
    pub api_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEASA_API_URL`: default `http://localhost:8000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api_url = parse_api_url(lookup("LEASA_API_URL").as_deref())?;
        Ok(Self { port, api_url })
    }

    /// Config handed to the Leptos app during SSR.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
