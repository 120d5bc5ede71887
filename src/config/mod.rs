//! Configuration management module
//!
//! Resolves the API base URL, timeouts, session storage and logging settings from the environment

pub mod settings;

pub use settings::{ClientConfig, LoggingConfig, SessionConfig, Settings};
