//! Logging utilities
//!
//! Subscriber setup and helpers that keep credentials out of the logs

use crate::config::LoggingConfig;
use reqwest::header::{HeaderMap, AUTHORIZATION};

/// Placeholder written instead of credential values
pub const REDACTED: &str = "[redacted]";

/// Initialize the global tracing subscriber
///
/// `json` format is meant for production, `text` for local use. Calling this
/// twice is a no-op for the second call.
pub fn init_logging(config: &LoggingConfig) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Logging system initialized");
    }
}

/// Header list safe to log: credential values replaced by [`REDACTED`]
pub fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == AUTHORIZATION || name.as_str().contains("token") {
                REDACTED.to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}
