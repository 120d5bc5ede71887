//! Auth API

use crate::http::{ApiClient, RequestDescriptor};
use crate::models::auth::{AuthToken, LoginRequest, RegisterRequest, UserProfile};
use crate::utils::error::ApiResult;
use serde_json::Value;
use std::sync::Arc;

pub fn login_request(email: &str, password: &str) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/auth/login").json(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn register_request(user: &RegisterRequest) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/auth/register").json(user)
}

pub fn refresh_request() -> RequestDescriptor {
    RequestDescriptor::post("/api/v1/auth/refresh")
}

pub fn logout_request() -> RequestDescriptor {
    RequestDescriptor::post("/api/v1/auth/logout")
}

pub fn current_user_request() -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/auth/me")
}

/// Authentication endpoints
///
/// These calls do not touch the stored session; see
/// [`crate::session::SessionManager`] for the login/logout flow.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        self.client.send(login_request(email, password)?).await
    }

    pub async fn register(&self, user: &RegisterRequest) -> ApiResult<UserProfile> {
        self.client.send(register_request(user)?).await
    }

    pub async fn refresh_token(&self) -> ApiResult<AuthToken> {
        self.client.send(refresh_request()).await
    }

    pub async fn logout(&self) -> ApiResult<Value> {
        self.client.execute(logout_request()).await
    }

    pub async fn current_user(&self) -> ApiResult<UserProfile> {
        self.client.send(current_user_request()).await
    }
}
