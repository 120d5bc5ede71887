//! Configuration module unit tests

use creatorkit::config::settings::{resolve_base_url, API_URL_ENV, DEFAULT_BASE_URL};
use creatorkit::http::RequestDescriptor;
use creatorkit::session::LoggingNavigator;
use creatorkit::{ApiClient, ClientConfig, MemoryTokenStore, Settings};
use std::env;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Tests in this file share the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 6] = [
    API_URL_ENV,
    "API_TIMEOUT_MS",
    "SESSION_STORE_PATH",
    "LOGIN_ROUTE",
    "RUST_LOG",
    "LOG_FORMAT",
];

/// Take the env lock and start from a clean environment
fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for var in &VARS {
        env::remove_var(var);
    }
    guard
}

fn cleanup_test_env() {
    for var in &VARS {
        env::remove_var(var);
    }
}

fn prepared_url(config: ClientConfig, path: &str) -> String {
    let client = ApiClient::new(
        config,
        Arc::new(MemoryTokenStore::new()),
        Arc::new(LoggingNavigator),
    )
    .unwrap();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime
        .block_on(client.prepare(RequestDescriptor::get(path)))
        .unwrap()
        .url
}

#[test]
fn test_settings_defaults() {
    let _guard = clean_env();

    let settings = Settings::new().unwrap();
    assert_eq!(settings.client.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.client.timeout(), Duration::from_secs(30));
    assert_eq!(settings.session.login_route, "/login");
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");

    cleanup_test_env();
}

#[test]
fn test_settings_from_env() {
    let _guard = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("session.json");

    env::set_var(API_URL_ENV, "https://api.example.com");
    env::set_var("API_TIMEOUT_MS", "5000");
    env::set_var("SESSION_STORE_PATH", &store_path);
    env::set_var("LOGIN_ROUTE", "/signin");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let settings = Settings::new().unwrap();
    assert_eq!(settings.client.base_url, "https://api.example.com");
    assert_eq!(settings.client.timeout_ms, 5000);
    assert_eq!(settings.session.store_path, store_path);
    assert_eq!(settings.session.login_route, "/signin");
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");

    cleanup_test_env();
}

#[test]
fn test_base_url_from_env_reaches_requests() {
    let _guard = clean_env();

    assert_eq!(
        prepared_url(ClientConfig::from_env(), "/api/v1/auth/me"),
        "http://localhost:8000/api/v1/auth/me"
    );

    env::set_var(API_URL_ENV, "https://api.example.com");
    assert_eq!(
        prepared_url(ClientConfig::from_env(), "/api/v1/auth/me"),
        "https://api.example.com/api/v1/auth/me"
    );

    cleanup_test_env();
}

#[test]
fn test_blank_base_url_falls_back() {
    let _guard = clean_env();

    env::set_var(API_URL_ENV, "   ");
    assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);

    assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    assert_eq!(
        resolve_base_url(Some(" https://api.example.com ".to_string())),
        "https://api.example.com"
    );

    cleanup_test_env();
}

#[test]
fn test_trailing_slash_in_base_url() {
    assert_eq!(
        prepared_url(ClientConfig::with_base_url("https://api.example.com/"), "/api/v1/copyright/violations"),
        "https://api.example.com/api/v1/copyright/violations"
    );
}

#[test]
fn test_settings_validation_invalid_timeout() {
    let _guard = clean_env();

    env::set_var("API_TIMEOUT_MS", "0");
    assert!(Settings::new().is_err());

    env::set_var("API_TIMEOUT_MS", "soon");
    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("Invalid timeout value"));

    cleanup_test_env();
}

#[test]
fn test_settings_validation_invalid_base_url() {
    let _guard = clean_env();

    env::set_var(API_URL_ENV, "api.example.com");
    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("Invalid API base URL"));

    cleanup_test_env();
}

#[test]
fn test_settings_validation_invalid_logging() {
    let _guard = clean_env();

    env::set_var("LOG_FORMAT", "xml");
    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("Invalid log format"));

    env::set_var("LOG_FORMAT", "text");
    env::set_var("RUST_LOG", "verbose");
    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("Invalid log level"));

    cleanup_test_env();
}

#[test]
fn test_settings_validation_relative_login_route() {
    let _guard = clean_env();

    env::set_var("LOGIN_ROUTE", "login");
    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("Login route"));

    cleanup_test_env();
}
