//! Monetization API

use crate::http::{ApiClient, RequestDescriptor};
use crate::models::monetization::{BrandOutreachRequest, RateCalculationRequest, TrackDealRequest};
use crate::utils::error::ApiResult;
use serde_json::Value;
use std::sync::Arc;

pub fn brand_deals_request() -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/monetization/deals")
}

pub fn brand_outreach_request(request: &BrandOutreachRequest) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/monetization/outreach").json(request)
}

pub fn calculate_rates_request(request: &RateCalculationRequest) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/monetization/calculate-rates").json(request)
}

pub fn track_deal_request(request: &TrackDealRequest) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/monetization/deals").json(request)
}

/// Brand deal and rate endpoints
#[derive(Debug, Clone)]
pub struct MonetizationApi {
    client: Arc<ApiClient>,
}

impl MonetizationApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn brand_deals(&self) -> ApiResult<Value> {
        self.client.execute(brand_deals_request()).await
    }

    pub async fn create_brand_outreach(&self, request: &BrandOutreachRequest) -> ApiResult<Value> {
        self.client.execute(brand_outreach_request(request)?).await
    }

    pub async fn calculate_rates(&self, request: &RateCalculationRequest) -> ApiResult<Value> {
        self.client.execute(calculate_rates_request(request)?).await
    }

    pub async fn track_deal(&self, request: &TrackDealRequest) -> ApiResult<Value> {
        self.client.execute(track_deal_request(request)?).await
    }
}
