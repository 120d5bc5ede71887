//! Sign-in / sign-out flow

use super::TokenStore;
use crate::api::AuthApi;
use crate::models::auth::AuthToken;
use crate::utils::error::ApiResult;
use std::sync::Arc;
use tracing::{info, warn};

/// Owns the session token lifecycle
///
/// The token is written on successful login or refresh and erased on
/// logout. Eviction on 401 is handled by the client's response pipeline.
#[derive(Clone)]
pub struct SessionManager {
    auth: AuthApi,
    store: Arc<dyn TokenStore>,
}

impl SessionManager {
    pub fn new(auth: AuthApi, store: Arc<dyn TokenStore>) -> Self {
        Self { auth, store }
    }

    /// Log in and persist the issued access token
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        let token = self.auth.login(email, password).await?;
        self.store.save(&token.access_token)?;
        info!("Signed in as {}", email);
        Ok(token)
    }

    /// Exchange the current session for a fresh token
    pub async fn refresh(&self) -> ApiResult<AuthToken> {
        let token = self.auth.refresh_token().await?;
        self.store.save(&token.access_token)?;
        info!("Session token refreshed");
        Ok(token)
    }

    /// Log out; the local token is erased whether or not the server call succeeds
    pub async fn sign_out(&self) -> ApiResult<()> {
        let result = self.auth.logout().await;

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear session token: {}", e);
        }
        info!("Signed out");

        result.map(|_| ())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.load(), Ok(Some(token)) if !token.is_empty())
    }
}
