//! Classification Engine for PrivacyGuard.
//!
//! Pure functions mapping risk scores to tiers and display semantics, and
//! timestamps to human-readable "time ago" buckets. Everything here is
//! total and side-effect free; callers inject the reference instant.

use crate::types::errors::ClassificationError;
use crate::types::settings::RiskThresholds;

/// Risk tier derived from a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Label the dashboard renders next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    /// Badge color for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "green",
            RiskTier::Medium => "yellow",
            RiskTier::High => "red",
        }
    }
}

/// Classify a risk score against the configured thresholds.
///
/// `score >= high` is High, `score >= medium` is Medium, anything below
/// is Low. Scores above 100 are rejected with `InvalidScore`. With the
/// default thresholds (medium 60, high 80) this reproduces the dashboard's
/// historical fixed-constant binning.
pub fn tier_of(score: u8, thresholds: &RiskThresholds) -> Result<RiskTier, ClassificationError> {
    if score > 100 {
        return Err(ClassificationError::InvalidScore(score as u32));
    }
    if score >= thresholds.high {
        Ok(RiskTier::High)
    } else if score >= thresholds.medium {
        Ok(RiskTier::Medium)
    } else {
        Ok(RiskTier::Low)
    }
}

/// Bucket an elapsed interval into a coarse "time ago" label.
///
/// "Just now" under a minute, then minutes, hours past 60 minutes, and
/// days past 24 hours. Both instants are Unix seconds; `now` is injected
/// so the function stays deterministic under test.
pub fn time_ago(now: i64, then: i64) -> String {
    let seconds = (now - then).max(0);
    let minutes = seconds / 60;
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Seconds-resolution variant used by the live feed, where sub-minute
/// precision matters.
pub fn time_ago_precise(now: i64, then: i64) -> String {
    let seconds = (now - then).max(0);
    if seconds < 60 {
        return format!("{}s ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    format!("{}h ago", minutes / 60)
}
