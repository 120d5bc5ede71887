//! HTTP client service
//!
//! Single shared entry point for every backend call. Owns the transport,
//! the client configuration and the interceptor pipeline.

use super::interceptor::{AuthInterceptor, RequestInterceptor, ResponseInterceptor, UnauthorizedInterceptor};
use super::request::{insert_header, PreparedRequest, RequestBody, RequestDescriptor};
use crate::config::settings::DEFAULT_LOGIN_ROUTE;
use crate::config::{ClientConfig, Settings};
use crate::session::{Navigator, TokenStore};
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::logging::redact_headers;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info_span, trace, warn, Instrument};
use uuid::Uuid;

/// Backend API client
///
/// Build one per process and share it behind an `Arc`; the domain API
/// modules all dispatch through the same instance.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish()
    }
}

/// Builder for [`ApiClient`] with a custom interceptor pipeline
pub struct ApiClientBuilder {
    config: ClientConfig,
    user_agent: String,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Append a request interceptor; interceptors run in registration order
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append a response interceptor; interceptors run in registration order
    pub fn response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn build(self) -> ApiResult<ApiClient> {
        // No client-wide timeout: every request carries its own deadline
        let http = Client::builder()
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| ApiError::Preparation(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ApiClient {
            http,
            config: self.config,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}

impl ApiClient {
    /// Client with the standard pipeline: bearer token injection and
    /// 401 handling redirecting to `/login`
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        Self::with_login_route(config, store, navigator, DEFAULT_LOGIN_ROUTE)
    }

    /// Client with the standard pipeline built from loaded settings
    pub fn from_settings(
        settings: &Settings,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        Self::with_login_route(settings.client.clone(), store, navigator, &settings.session.login_route)
    }

    fn with_login_route(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_route: &str,
    ) -> ApiResult<Self> {
        Self::builder(config)
            .request_interceptor(AuthInterceptor::new(store.clone()))
            .response_interceptor(UnauthorizedInterceptor::new(store, navigator, login_route))
            .build()
    }

    /// Builder with no interceptors installed
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatch a request and deserialize the response body
    pub async fn send<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> ApiResult<T> {
        let value = self.execute(descriptor).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Dispatch a request and return the raw JSON body
    ///
    /// An empty success body is returned as `Value::Null`.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        let request = self.prepare(descriptor).await?;

        let span = info_span!(
            "api_request",
            request_id = %request.request_id,
            method = %request.method,
            path = %request.path,
        );

        async {
            let start_time = Instant::now();
            debug!("Request started: {} {}", request.method, request.url);
            trace!("Request headers: {:?}", redact_headers(&request.headers));

            let outcome = self.dispatch(&request).await;
            let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

            match &outcome {
                Ok((status, _)) => {
                    debug!("Request completed: {} - Duration: {:.2}ms", status, duration_ms);
                    for interceptor in &self.response_interceptors {
                        interceptor.on_success(&request, *status).await;
                    }
                }
                Err(err) => {
                    if err.is_server_error() {
                        error!("Server error: {} - Duration: {:.2}ms", err, duration_ms);
                    } else {
                        warn!("Request failed: {} - Duration: {:.2}ms", err, duration_ms);
                    }
                    for interceptor in &self.response_interceptors {
                        interceptor.on_error(&request, err).await;
                    }
                }
            }

            outcome.map(|(_, body)| body)
        }
        .instrument(span)
        .await
    }

    /// Resolve a descriptor against the client configuration and run the
    /// request interceptors
    ///
    /// Header precedence is defaults < descriptor overrides < interceptors.
    /// The default content type is only sent with a JSON body.
    pub async fn prepare(&self, descriptor: RequestDescriptor) -> ApiResult<PreparedRequest> {
        let RequestDescriptor {
            method,
            path,
            query,
            body,
            headers: overrides,
            timeout,
        } = descriptor;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.config.default_headers {
            insert_header(&mut headers, name, value)?;
        }
        match &body {
            // No payload, no content type
            RequestBody::Empty => {
                headers.remove(CONTENT_TYPE);
            }
            // The transport writes multipart/form-data with its boundary
            RequestBody::Multipart(_) => {
                headers.remove(CONTENT_TYPE);
            }
            RequestBody::Json(_) => {}
        }
        for (name, value) in &overrides {
            insert_header(&mut headers, name, value)?;
        }

        let mut request = PreparedRequest {
            request_id: Uuid::new_v4(),
            method,
            url: self.resolve_url(&path),
            path,
            query,
            headers,
            body,
            timeout: timeout.unwrap_or_else(|| self.config.timeout()),
        };

        for interceptor in &self.request_interceptors {
            interceptor.intercept(&mut request).await?;
        }

        Ok(request)
    }

    fn resolve_url(&self, path: &str) -> String {
        let base_url = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base_url, path)
        } else {
            format!("{}/{}", base_url, path)
        }
    }

    async fn dispatch(&self, request: &PreparedRequest) -> ApiResult<(u16, Value)> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url.as_str())
            .headers(request.headers.clone())
            .timeout(request.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(form) => builder.multipart(form.to_form()?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, request.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, request.timeout))?;

        if !response_ok(status) {
            return Err(ApiError::from_response(status, body));
        }

        if body.trim().is_empty() {
            return Ok((status, Value::Null));
        }

        let value = serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialization(format!("Invalid JSON response: {}", e)))?;
        Ok((status, value))
    }
}

fn response_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout(timeout)
    } else {
        ApiError::Network(err.to_string())
    }
}
