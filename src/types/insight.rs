use serde::{Deserialize, Serialize};

use super::permission::PermissionEvent;

/// Aggregated privacy profile for a single visited domain.
///
/// `risk_score` is an externally derived 0–100 metric; the classification
/// engine maps it to a tier against the configured thresholds.
/// `permissions` holds the permission events recorded for this domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebsiteInsight {
    pub id: String,
    pub domain: String,
    pub tracker_count: u32,
    pub permission_usage: u32,
    /// Unix timestamp (seconds) of the most recent activity.
    pub last_activity: i64,
    pub risk_score: u8,
    pub visit_count: u32,
    pub permissions: Vec<PermissionEvent>,
}
