//! Error handling module
//!
//! Defines the normalized error surfaced to API callers and the token store errors

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Message used when the server did not provide a `detail`
pub const GENERIC_ERROR_MESSAGE: &str = "Request failed";

/// Normalized API error
///
/// Every failure of a call through [`crate::ApiClient`] ends up here, so UI
/// code only has to look at [`ApiError::status`] and [`ApiError::message`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received (DNS, connect, reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// The per-request deadline elapsed
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server answered 401
    #[error("Unauthorized: {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Unauthorized {
        detail: Option<String>,
        body: String,
    },

    /// The server answered with any other non-2xx status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Http {
        status: u16,
        detail: Option<String>,
        body: String,
    },

    /// The request could not be prepared (interceptor failure, bad header...)
    #[error("Request preparation failed: {0}")]
    Preparation(String),

    /// Request body serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Token store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Token store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a valid session document
    #[error("Token store is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// A writer panicked while holding the lock
    #[error("Token store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Preparation(err.to_string())
    }
}

impl ApiError {
    /// Build the error for a non-2xx response
    pub fn from_response(status: u16, body: String) -> Self {
        let detail = extract_detail(&body);
        if status == 401 {
            ApiError::Unauthorized { detail, body }
        } else {
            ApiError::Http { status, detail, body }
        }
    }

    /// HTTP status, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail, .. } | ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Normalized message: server detail or the generic fallback
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized { .. } | ApiError::Http { .. } => {
                self.detail().unwrap_or(GENERIC_ERROR_MESSAGE).to_string()
            }
            other => other.to_string(),
        }
    }

    /// Message to show a user: server detail, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(s) if (400..500).contains(&s))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network_error",
            ApiError::Timeout(_) => "timeout_error",
            ApiError::Unauthorized { .. } => "authentication_error",
            ApiError::Http { status: 403, .. } => "permission_error",
            ApiError::Http { status: 404, .. } => "not_found_error",
            ApiError::Http { status: 429, .. } => "rate_limit_error",
            ApiError::Http { status, .. } if *status >= 500 => "server_error",
            ApiError::Http { .. } => "invalid_request_error",
            ApiError::Preparation(_) => "preparation_error",
            ApiError::Serialization(_) | ApiError::Deserialization(_) => "serialization_error",
        }
    }
}

/// Pull a readable message out of an error body
///
/// The backend answers `{"detail": "..."}`, `{"detail": {"message": "..."}}`
/// for quota errors, or a list of `{"msg": "..."}` for validation errors.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail": "Content not found"}"#),
            Some("Content not found".to_string())
        );
    }

    #[test]
    fn test_extract_detail_object() {
        let body = r#"{"detail": {"message": "Monthly video repurposing limit reached", "upgrade_required": true}}"#;
        assert_eq!(
            extract_detail(body),
            Some("Monthly video repurposing limit reached".to_string())
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "count"], "msg": "ensure this value is less than or equal to 10"}]}"#;
        assert_eq!(
            extract_detail(body),
            Some("ensure this value is less than or equal to 10".to_string())
        );
    }

    #[test]
    fn test_extract_detail_missing() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error": "x"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": ""}"#), None);
    }

    #[test]
    fn test_from_response_401() {
        let err = ApiError::from_response(401, r#"{"detail": "Could not validate credentials"}"#.to_string());
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.message(), "Could not validate credentials");
    }

    #[test]
    fn test_message_fallback() {
        let err = ApiError::from_response(500, String::new());
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(err.user_message("Failed to generate ideas. Please try again."), "Failed to generate ideas. Please try again.");
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_store_error_becomes_preparation() {
        let err: ApiError = StoreError::Poisoned.into();
        assert!(matches!(err, ApiError::Preparation(_)));
        assert_eq!(err.status(), None);
    }
}
