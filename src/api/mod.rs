//! Domain API modules
//!
//! Each module maps named backend operations to request descriptors and
//! dispatches them through the shared [`ApiClient`]. The modules hold no
//! state of their own.
//!
//! Every operation exists twice: a pure `*_request` function that builds the
//! [`crate::http::RequestDescriptor`], and an async method that sends it.

pub mod analytics;
pub mod auth;
pub mod content;
pub mod copyright;
pub mod monetization;

use crate::http::ApiClient;
use std::sync::Arc;

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use content::ContentApi;
pub use copyright::CopyrightApi;
pub use monetization::MonetizationApi;

/// All API surfaces over one shared client
#[derive(Debug, Clone)]
pub struct Api {
    pub auth: AuthApi,
    pub content: ContentApi,
    pub analytics: AnalyticsApi,
    pub monetization: MonetizationApi,
    pub copyright: CopyrightApi,
    client: Arc<ApiClient>,
}

impl Api {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            content: ContentApi::new(client.clone()),
            analytics: AnalyticsApi::new(client.clone()),
            monetization: MonetizationApi::new(client.clone()),
            copyright: CopyrightApi::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}
