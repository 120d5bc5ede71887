//! Content generation models

use super::timestamp;
use crate::http::request::{FilePart, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Idea generation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateIdeasRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Number of ideas, the backend accepts 1-10
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// One generated idea
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentIdea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// 0-100
    pub engagement_score: u8,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub platform_optimized: Option<String>,
}

/// Video uploaded for repurposing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Video repurposing payload, sent as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepurposeVideoRequest {
    pub video: VideoUpload,
    pub title: String,
    pub description: Option<String>,
    /// Empty means the server default (youtube, instagram, tiktok)
    pub target_platforms: Vec<String>,
    pub tone: Option<String>,
}

impl RepurposeVideoRequest {
    /// Multipart form with the field names the backend expects
    pub fn to_form(&self) -> MultipartForm {
        let platforms = if self.target_platforms.is_empty() {
            None
        } else {
            Some(self.target_platforms.join(","))
        };

        MultipartForm::new()
            .text("title", self.title.as_str())
            .text_opt("description", self.description.as_deref())
            .text_opt("target_platforms", platforms)
            .text_opt("tone", self.tone.as_deref())
            .file(FilePart {
                name: "video_file".to_string(),
                file_name: self.video.file_name.clone(),
                content_type: self.video.content_type.clone(),
                bytes: self.video.bytes.clone(),
            })
    }
}

/// Result of repurposing a video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepurposedVideo {
    pub id: Uuid,
    pub original_title: String,
    pub transcript: String,
    /// Platform -> generated copy
    pub repurposed_content: BTreeMap<String, String>,
    #[serde(default)]
    pub platforms_generated: Vec<String>,
}

/// Filters for the content history listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub content_type: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One entry of the content history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentHistoryItem {
    pub id: Uuid,
    pub content_type: String,
    pub title: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> VideoUpload {
        VideoUpload {
            file_name: "clip.mp4".to_string(),
            content_type: Some("video/mp4".to_string()),
            bytes: vec![0u8; 16],
        }
    }

    #[test]
    fn test_generate_ideas_omits_missing_fields() {
        let request = GenerateIdeasRequest {
            topic: "home workouts".to_string(),
            niche: Some("fitness".to_string()),
            audience: None,
            count: 5,
            platform: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["niche"], "fitness");
        assert_eq!(value["count"], 5);
        assert!(value.get("audience").is_none());
        assert!(value.get("platform").is_none());
    }

    #[test]
    fn test_repurpose_form_fields() {
        let request = RepurposeVideoRequest {
            video: upload(),
            title: "Morning routine".to_string(),
            description: None,
            target_platforms: vec!["tiktok".to_string(), "youtube".to_string()],
            tone: Some("casual".to_string()),
        };
        let form = request.to_form();

        assert_eq!(form.field("title"), Some("Morning routine"));
        assert_eq!(form.field("description"), None);
        assert_eq!(form.field("target_platforms"), Some("tiktok,youtube"));
        assert_eq!(form.field("tone"), Some("casual"));
        assert_eq!(form.files.len(), 1);
        assert_eq!(form.files[0].name, "video_file");
        assert_eq!(form.file_bytes(), 16);
    }

    #[test]
    fn test_repurpose_form_leaves_defaults_to_server() {
        let request = RepurposeVideoRequest {
            video: upload(),
            title: "t".to_string(),
            description: None,
            target_platforms: Vec::new(),
            tone: None,
        };
        let form = request.to_form();
        assert_eq!(form.field("target_platforms"), None);
        assert_eq!(form.field("tone"), None);
    }

    #[test]
    fn test_history_item_naive_timestamp() {
        let body = r#"{
            "id": "5b0f6c1e-8f5e-4f7e-9f0a-2a1b3c4d5e6f",
            "content_type": "idea",
            "title": "10 stretches",
            "created_at": "2024-05-01T10:20:30",
            "metadata": {"platform": "tiktok"}
        }"#;
        let item: ContentHistoryItem = serde_json::from_str(body).unwrap();
        assert_eq!(item.content_type, "idea");
        assert_eq!(item.metadata.unwrap()["platform"], "tiktok");
    }
}
