//! HTTP layer
//!
//! Request descriptors, the interceptor pipeline and the shared client

pub mod client;
pub mod interceptor;
pub mod request;

pub use client::{ApiClient, ApiClientBuilder};
pub use interceptor::{AuthInterceptor, RequestInterceptor, ResponseInterceptor, UnauthorizedInterceptor};
pub use request::{FilePart, MultipartForm, PreparedRequest, RequestBody, RequestDescriptor};
