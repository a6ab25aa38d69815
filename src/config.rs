//! Host configuration parsed from environment variables.
//!
//! `main` loads `.env` with `dotenvy` before calling [`ServerConfig::from_env`].
//! Leptos render options come from `[package.metadata.leptos]` in `Cargo.toml`
//! (overridable through the usual `LEPTOS_*` variables).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::{LeptosOptions, get_configuration};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build the listen configuration from the environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but is not a
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Same as [`from_env`](Self::from_env) with the raw values passed in.
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] on an unparsable port.
    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = non_blank(host).unwrap_or(DEFAULT_HOST).to_owned();
        let port = match non_blank(port) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Leptos options for SSR and asset serving.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the `[package.metadata.leptos]` section
/// is missing or malformed.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ConfigError::Leptos(e.to_string()))
}
