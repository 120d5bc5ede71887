//! Monetization models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Brand outreach payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandOutreachRequest {
    pub brand_name: String,
    pub email: String,
    pub proposal_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

/// Sponsorship rate calculation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateCalculationRequest {
    pub platform: String,
    pub followers: u64,
    /// Percentage, e.g. `4.2`
    pub engagement_rate: f64,
    pub content_type: String,
}

/// Lifecycle of a tracked brand deal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

/// Deal tracking payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackDealRequest {
    pub brand_name: String,
    pub deal_value: f64,
    pub status: DealStatus,
    /// Serialized as `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_deal_wire_format() {
        let request = TrackDealRequest {
            brand_name: "Acme".to_string(),
            deal_value: 1500.0,
            status: DealStatus::Active,
            deadline: NaiveDate::from_ymd_opt(2024, 12, 31),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["status"], "ACTIVE");
        assert_eq!(value["deadline"], "2024-12-31");
    }

    #[test]
    fn test_outreach_omits_missing_message() {
        let request = BrandOutreachRequest {
            brand_name: "Acme".to_string(),
            email: "partners@acme.test".to_string(),
            proposal_type: "sponsored_post".to_string(),
            custom_message: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("custom_message").is_none());
    }
}
