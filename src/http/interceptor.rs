//! Request/response interceptors
//!
//! Interceptors are the only place cross-cutting policy lives. The client
//! runs every request interceptor, in registration order, before a request
//! is sent, and every response interceptor after the outcome is known.

use super::request::PreparedRequest;
use crate::session::{Navigator, TokenStore};
use crate::utils::error::{ApiError, ApiResult};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Hook run before a request is dispatched
///
/// Returning an error aborts the call; nothing is sent.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn intercept(&self, request: &mut PreparedRequest) -> ApiResult<()>;
}

/// Hook run after a request completed or failed
///
/// Response interceptors observe the outcome; they cannot turn a failure
/// into a success.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    async fn on_success(&self, _request: &PreparedRequest, _status: u16) {}

    async fn on_error(&self, request: &PreparedRequest, error: &ApiError);
}

/// Attaches `Authorization: Bearer <token>` when a session token is stored
pub struct AuthInterceptor {
    store: Arc<dyn TokenStore>,
}

impl AuthInterceptor {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestInterceptor for AuthInterceptor {
    async fn intercept(&self, request: &mut PreparedRequest) -> ApiResult<()> {
        let token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                // An unreadable store behaves like a signed-out session
                warn!("Failed to read session token, sending request unauthenticated: {}", e);
                None
            }
        };

        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                request.set_header(AUTHORIZATION.as_str(), &format!("Bearer {}", token))?;
                debug!("Attached bearer token");
            }
            None => debug!("No session token, sending without Authorization"),
        }

        Ok(())
    }
}

/// Ends the session when the server answers 401
///
/// Erases the stored token and sends the navigator to the login route. The
/// failed call still returns its error to the caller.
pub struct UnauthorizedInterceptor {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl UnauthorizedInterceptor {
    pub fn new(
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            login_route: login_route.into(),
        }
    }
}

#[async_trait]
impl ResponseInterceptor for UnauthorizedInterceptor {
    async fn on_error(&self, request: &PreparedRequest, error: &ApiError) {
        if !error.is_unauthorized() {
            return;
        }

        warn!(
            "Unauthorized response for {} {}, clearing session",
            request.method, request.path
        );

        if let Err(e) = self.store.clear() {
            error!("Failed to clear session token: {}", e);
        }

        self.navigator.redirect(&self.login_route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::RequestBody;
    use crate::session::MemoryTokenStore;
    use crate::utils::error::StoreError;
    use reqwest::header::HeaderMap;
    use reqwest::Method;
    use std::sync::Mutex;
    use std::time::Duration;
    use uuid::Uuid;

    fn prepared() -> PreparedRequest {
        PreparedRequest {
            request_id: Uuid::new_v4(),
            method: Method::GET,
            path: "/api/v1/auth/me".to_string(),
            url: "http://localhost:8000/api/v1/auth/me".to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            timeout: Duration::from_secs(30),
        }
    }

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }
        fn save(&self, _token: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[tokio::test]
    async fn test_auth_interceptor_attaches_token() {
        let interceptor = AuthInterceptor::new(Arc::new(MemoryTokenStore::with_token("tok-123")));
        let mut request = prepared();
        interceptor.intercept(&mut request).await.unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn test_auth_interceptor_without_token() {
        let interceptor = AuthInterceptor::new(Arc::new(MemoryTokenStore::new()));
        let mut request = prepared();
        interceptor.intercept(&mut request).await.unwrap();
        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn test_auth_interceptor_ignores_empty_token() {
        let interceptor = AuthInterceptor::new(Arc::new(MemoryTokenStore::with_token("")));
        let mut request = prepared();
        interceptor.intercept(&mut request).await.unwrap();
        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn test_auth_interceptor_store_failure_is_not_an_error() {
        let interceptor = AuthInterceptor::new(Arc::new(BrokenStore));
        let mut request = prepared();
        assert!(interceptor.intercept(&mut request).await.is_ok());
        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn test_auth_interceptor_rejects_unsendable_token() {
        let interceptor = AuthInterceptor::new(Arc::new(MemoryTokenStore::with_token("bad\ntoken")));
        let mut request = prepared();
        let err = interceptor.intercept(&mut request).await.unwrap_err();
        assert!(matches!(err, ApiError::Preparation(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_interceptor_only_reacts_to_401() {
        let store = Arc::new(MemoryTokenStore::with_token("tok"));
        let routes = Arc::new(Mutex::new(Vec::<String>::new()));
        let recorded = routes.clone();
        let interceptor = UnauthorizedInterceptor::new(
            store.clone(),
            Arc::new(move |route: &str| recorded.lock().unwrap().push(route.to_string())),
            "/login",
        );
        let request = prepared();

        interceptor
            .on_error(&request, &ApiError::from_response(403, String::new()))
            .await;
        interceptor.on_error(&request, &ApiError::Network("refused".into())).await;
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));
        assert!(routes.lock().unwrap().is_empty());

        interceptor
            .on_error(&request, &ApiError::from_response(401, String::new()))
            .await;
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(*routes.lock().unwrap(), vec!["/login".to_string()]);
    }
}
