//! Creator platform API client
//!
//! Typed access to the content, analytics, monetization and copyright
//! endpoints through one shared HTTP client with an interceptor pipeline

pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod models;
pub mod session;
pub mod utils;

// Re-export common types
pub use api::{AnalyticsApi, Api, AuthApi, ContentApi, CopyrightApi, MonetizationApi};
pub use config::{ClientConfig, Settings};
pub use http::{ApiClient, RequestDescriptor};
pub use session::{FileTokenStore, MemoryTokenStore, Navigator, SessionManager, TokenStore};
pub use utils::error::{ApiError, ApiResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
