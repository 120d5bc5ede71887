//! Session module
//!
//! Token storage, login redirection and the sign-in/sign-out flow

pub mod manager;
pub mod navigator;
pub mod store;

use crate::utils::error::StoreError;

/// Key the session token is persisted under
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Persistent storage for the session token
///
/// Reads happen on every outgoing request; writes only on login, logout and
/// 401 eviction. Implementations are last-writer-wins.
pub trait TokenStore: Send + Sync {
    /// Current token, `None` when signed out
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored token
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Erase the stored token; clearing an empty store is not an error
    fn clear(&self) -> Result<(), StoreError>;
}

pub use manager::SessionManager;
pub use navigator::{LoggingNavigator, Navigator};
pub use store::{FileTokenStore, MemoryTokenStore};
