//! Server configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `BILLED_*` environment variables over the
//! configuration file.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5678";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COOKIE_SECURE: bool = true;
const DEFAULT_USE_FIXTURES: bool = false;

/// Failure interpreting configured values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bills API base URL does not parse.
    #[error("invalid bills API base URL {value:?}: {message}")]
    InvalidApiBaseUrl {
        /// Configured value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Configuration values controlling the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BILLED")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Base URL of the bills REST API.
    pub api_base_url: Option<String>,
    /// Timeout for bills API requests, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: Option<bool>,
    /// Serve the built-in demonstration bills instead of calling the API.
    pub use_fixtures: Option<bool>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Parse the configured bills API base URL, falling back to the default.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(raw).map_err(|error| SettingsError::InvalidApiBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Whether the session cookie is marked `Secure`; on unless disabled.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(DEFAULT_COOKIE_SECURE)
    }

    /// Whether the built-in demonstration bills replace the API.
    pub fn use_fixtures(&self) -> bool {
        self.use_fixtures.unwrap_or(DEFAULT_USE_FIXTURES)
    }

    /// Return the bills API request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
