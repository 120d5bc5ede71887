//! Content API

use crate::http::request::encode_segment;
use crate::http::{ApiClient, RequestDescriptor};
use crate::models::content::{
    ContentHistoryItem, ContentIdea, GenerateIdeasRequest, HistoryQuery, RepurposeVideoRequest,
    RepurposedVideo,
};
use crate::models::MessageResponse;
use crate::utils::error::ApiResult;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Transcription and repurposing run synchronously on the server
pub const REPURPOSE_TIMEOUT: Duration = Duration::from_millis(120_000);

pub fn generate_ideas_request(request: &GenerateIdeasRequest) -> ApiResult<RequestDescriptor> {
    RequestDescriptor::post("/api/v1/content/generate-ideas").json(request)
}

pub fn repurpose_video_request(request: &RepurposeVideoRequest) -> RequestDescriptor {
    RequestDescriptor::post("/api/v1/content/repurpose-video")
        .multipart(request.to_form())
        .timeout(REPURPOSE_TIMEOUT)
}

pub fn history_request(query: &HistoryQuery) -> RequestDescriptor {
    RequestDescriptor::get("/api/v1/content/history")
        .query_opt("content_type", query.content_type.as_deref())
        .query_opt("limit", query.limit)
        .query_opt("offset", query.offset)
}

pub fn delete_content_request(content_id: &str) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/api/v1/content/{}", encode_segment(content_id)))
}

/// Content generation endpoints
#[derive(Debug, Clone)]
pub struct ContentApi {
    client: Arc<ApiClient>,
}

impl ContentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn generate_ideas(&self, request: &GenerateIdeasRequest) -> ApiResult<Vec<ContentIdea>> {
        self.client.send(generate_ideas_request(request)?).await
    }

    pub async fn repurpose_video(&self, request: &RepurposeVideoRequest) -> ApiResult<RepurposedVideo> {
        debug!(
            "Uploading {} ({} bytes) for repurposing",
            request.video.file_name,
            request.video.bytes.len()
        );
        self.client.send(repurpose_video_request(request)).await
    }

    pub async fn history(&self, query: &HistoryQuery) -> ApiResult<Vec<ContentHistoryItem>> {
        self.client.send(history_request(query)).await
    }

    pub async fn delete_content(&self, content_id: &str) -> ApiResult<MessageResponse> {
        self.client.send(delete_content_request(content_id)).await
    }
}
