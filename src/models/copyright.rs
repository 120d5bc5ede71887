//! Copyright monitoring models

use serde::{Deserialize, Serialize};

/// Request to start monitoring a piece of content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitoringRequest {
    pub content_url: String,
    pub content_type: String,
    /// e.g. `daily`, `weekly`
    pub monitoring_frequency: String,
}
