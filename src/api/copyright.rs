//! Copyright API

use crate::http::request::encode_segment;
use crate::http::{ApiClient, RequestDescriptor};
use crate::models::copyright::MonitoringRequest;
use crate::utils::error::ApiResult;
use serde_json::Value;
use std::sync::Arc;

pub fn monitoring_status_request() -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/copyright/monitoring")
}

pub fn setup_monitoring_request(request: &MonitoringRequest) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/copyright/monitor").json(request)
}

pub fn violations_request() -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/copyright/violations")
}

pub fn submit_dmca_request(violation_id: &str) -> RequestDescriptor {
    RequestDescriptor::post(format!(
        "/api/v1/copyright/violations/{}/dmca",
        encode_segment(violation_id)
    ))
}

/// Copyright monitoring endpoints
#[derive(Debug, Clone)]
pub struct CopyrightApi {
    client: Arc<ApiClient>,
}

impl CopyrightApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn monitoring_status(&self) -> ApiResult<Value> {
        self.client.execute(monitoring_status_request()).await
    }

    pub async fn setup_monitoring(&self, request: &MonitoringRequest) -> ApiResult<Value> {
        self.client.execute(setup_monitoring_request(request)?).await
    }

    pub async fn violations(&self) -> ApiResult<Value> {
        self.client.execute(violations_request()).await
    }

    pub async fn submit_dmca(&self, violation_id: &str) -> ApiResult<Value> {
        self.client.execute(submit_dmca_request(violation_id)).await
    }
}
