//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Base URL used when [`API_URL_ENV`] is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Route the client is sent to after a 401
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP client configuration
    pub client: ClientConfig,
    /// Session configuration
    pub session: SessionConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP client configuration
///
/// Fixed once the client is built; per-call overrides live on the request
/// descriptor instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// Default request timeout in milliseconds
    pub timeout_ms: u64,
    /// Headers sent with every request unless overridden
    pub default_headers: BTreeMap<String, String>,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token file used by the file-backed store
    pub store_path: PathBuf,
    /// Route passed to the navigator on 401
    pub login_route: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Configuration with default timeout and headers against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers,
        }
    }

    /// Resolve the base URL from [`API_URL_ENV`], falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        Self::with_base_url(resolve_base_url(std::env::var(API_URL_ENV).ok()))
    }

    /// Default timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let mut client = ClientConfig::from_env();
        client.timeout_ms = get_env_or_default("API_TIMEOUT_MS", &DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .context("Invalid timeout value")?;

        let settings = Self {
            client,
            session: SessionConfig {
                store_path: std::env::var("SESSION_STORE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_store_path()),
                login_route: get_env_or_default("LOGIN_ROUTE", DEFAULT_LOGIN_ROUTE),
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        // Validate URL format
        if !self.client.base_url.starts_with("http") {
            anyhow::bail!("Invalid API base URL format, should start with 'http'");
        }

        if self.client.timeout_ms == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if !self.session.login_route.starts_with('/') {
            anyhow::bail!("Login route must be an absolute path: {}", self.session.login_route);
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Pick the configured base URL, ignoring blank values
pub fn resolve_base_url(configured: Option<String>) -> String {
    configured
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// `~/.config/creatorkit/session.json`, or `./session.json` without a home dir
fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config").join("creatorkit").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("session.json"))
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.default_headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(resolve_base_url(None), "http://localhost:8000");
        assert_eq!(resolve_base_url(Some("   ".to_string())), "http://localhost:8000");
        assert_eq!(
            resolve_base_url(Some("https://api.example.com".to_string())),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_session_defaults() {
        let session = SessionConfig::default();
        assert_eq!(session.login_route, "/login");
        assert!(session.store_path.ends_with("session.json"));
    }
}
