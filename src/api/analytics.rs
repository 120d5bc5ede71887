//! Analytics API

use crate::http::request::encode_segment;
use crate::http::{ApiClient, RequestDescriptor};
use crate::utils::error::ApiResult;
use serde_json::Value;
use std::sync::Arc;

/// Dashboard window used when the caller does not pick one
pub const DEFAULT_TIMEFRAME: &str = "30d";

pub fn dashboard_request(timeframe: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/analytics/dashboard")
        .query("timeframe", timeframe.unwrap_or(DEFAULT_TIMEFRAME))
}

pub fn performance_request(platform: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/analytics/performance").query_opt("platform", platform)
}

pub fn content_insights_request(content_id: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!(
        "/api/v1/analytics/content/{}/insights",
        encode_segment(content_id)
    ))
}

pub fn competitor_analysis_request(competitor: &str) -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/analytics/competitors").query("competitor", competitor)
}

/// Analytics endpoints
///
/// Report shapes are owned by the backend and returned as raw JSON.
#[derive(Debug, Clone)]
pub struct AnalyticsApi {
    client: Arc<ApiClient>,
}

impl AnalyticsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn dashboard(&self, timeframe: Option<&str>) -> ApiResult<Value> {
        self.client.execute(dashboard_request(timeframe)).await
    }

    pub async fn performance(&self, platform: Option<&str>) -> ApiResult<Value> {
        self.client.execute(performance_request(platform)).await
    }

    pub async fn content_insights(&self, content_id: &str) -> ApiResult<Value> {
        self.client.execute(content_insights_request(content_id)).await
    }

    pub async fn competitor_analysis(&self, competitor: &str) -> ApiResult<Value> {
        self.client.execute(competitor_analysis_request(competitor)).await
    }
}
