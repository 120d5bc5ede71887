//! Authentication models

use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
}

/// Token issued by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Authenticated user as returned by `/auth/me` and `/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub subscription_plan: Option<String>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content_ideas_used_this_month: u32,
    #[serde(default)]
    pub video_repurposing_used_this_month: u32,
    #[serde(default)]
    pub copyright_alerts_used_this_month: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_omits_missing_niche() {
        let request = RegisterRequest {
            email: "a@b.co".to_string(),
            password: "Secret123".to_string(),
            full_name: "Ada".to_string(),
            niche: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("niche").is_none());
        assert_eq!(value["full_name"], "Ada");
    }

    #[test]
    fn test_auth_token_defaults() {
        let token: AuthToken = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.refresh_token, None);
    }

    #[test]
    fn test_user_profile_from_backend() {
        let body = r#"{
            "id": "5b0f6c1e-8f5e-4f7e-9f0a-2a1b3c4d5e6f",
            "email": "ada@example.com",
            "full_name": "Ada Lovelace",
            "is_active": true,
            "is_verified": false,
            "subscription_plan": "FREE",
            "created_at": "2024-05-01T10:20:30.123456",
            "content_ideas_used_this_month": 3,
            "video_repurposing_used_this_month": 1,
            "copyright_alerts_used_this_month": 0
        }"#;
        let user: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(user.full_name, "Ada Lovelace");
        assert_eq!(user.subscription_plan.as_deref(), Some("FREE"));
        assert!(user.created_at.is_some());
        assert_eq!(user.content_ideas_used_this_month, 3);
    }
}
