//! Aggregation and filter layer for PrivacyGuard.
//!
//! Pure transforms over event, alert, and insight collections: search and
//! category filters, stable descending sorts, and count reductions. No
//! hidden state; every function is O(n) over its input slice.

use std::collections::HashMap;

use crate::types::alert::{Alert, AlertType};
use crate::types::errors::QueryError;
use crate::types::insight::WebsiteInsight;
use crate::types::permission::{PermissionEvent, PermissionKind};

/// Permission category filter for the live feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionFilter {
    All,
    Only(PermissionKind),
}

impl PermissionFilter {
    /// Parse the filter value the dashboard's select control submits.
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        match value {
            "all" => Ok(PermissionFilter::All),
            "camera" => Ok(PermissionFilter::Only(PermissionKind::Camera)),
            "microphone" => Ok(PermissionFilter::Only(PermissionKind::Microphone)),
            "location" => Ok(PermissionFilter::Only(PermissionKind::Location)),
            "storage" => Ok(PermissionFilter::Only(PermissionKind::Storage)),
            "notifications" => Ok(PermissionFilter::Only(PermissionKind::Notifications)),
            other => Err(QueryError::UnknownFilter(other.to_string())),
        }
    }

    fn matches(&self, kind: PermissionKind) -> bool {
        match self {
            PermissionFilter::All => true,
            PermissionFilter::Only(k) => *k == kind,
        }
    }
}

/// Filter events by case-insensitive domain substring and permission
/// category. Input order is preserved.
pub fn filter_events(
    events: &[PermissionEvent],
    search_term: &str,
    permission: &PermissionFilter,
) -> Vec<PermissionEvent> {
    let needle = search_term.to_lowercase();
    events
        .iter()
        .filter(|e| e.domain.to_lowercase().contains(&needle) && permission.matches(e.permission))
        .cloned()
        .collect()
}

/// Alert list filter modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFilter {
    All,
    Unread,
    Critical,
    Warning,
}

impl AlertFilter {
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        match value {
            "all" => Ok(AlertFilter::All),
            "unread" => Ok(AlertFilter::Unread),
            "critical" => Ok(AlertFilter::Critical),
            "warning" => Ok(AlertFilter::Warning),
            other => Err(QueryError::UnknownFilter(other.to_string())),
        }
    }

    fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unread => !alert.is_read,
            AlertFilter::Critical => alert.alert_type == AlertType::Critical,
            AlertFilter::Warning => alert.alert_type == AlertType::Warning,
        }
    }
}

/// Filter alerts by mode, preserving input order.
pub fn filter_alerts(alerts: &[Alert], filter: &AlertFilter) -> Vec<Alert> {
    alerts.iter().filter(|a| filter.matches(a)).cloned().collect()
}

/// Sort key for the website insights grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSortKey {
    RiskScore,
    VisitCount,
    LastActivity,
}

impl InsightSortKey {
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        match value {
            "riskScore" => Ok(InsightSortKey::RiskScore),
            "visitCount" => Ok(InsightSortKey::VisitCount),
            "lastActivity" => Ok(InsightSortKey::LastActivity),
            other => Err(QueryError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Sort insights descending by the chosen key.
///
/// Uses a stable sort, so ties keep their original relative order.
pub fn sort_insights(insights: &[WebsiteInsight], key: InsightSortKey) -> Vec<WebsiteInsight> {
    let mut sorted = insights.to_vec();
    match key {
        InsightSortKey::RiskScore => sorted.sort_by(|a, b| b.risk_score.cmp(&a.risk_score)),
        InsightSortKey::VisitCount => sorted.sort_by(|a, b| b.visit_count.cmp(&a.visit_count)),
        InsightSortKey::LastActivity => {
            sorted.sort_by(|a, b| b.last_activity.cmp(&a.last_activity))
        }
    }
    sorted
}

/// Count summary for the alert list header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertCounts {
    pub total: usize,
    pub unread: usize,
    pub critical: usize,
    pub warning: usize,
    pub read: usize,
}

/// Reduce an alert collection to its header counts.
pub fn alert_counts(alerts: &[Alert]) -> AlertCounts {
    let mut counts = AlertCounts {
        total: alerts.len(),
        ..AlertCounts::default()
    };
    for alert in alerts {
        if alert.is_read {
            counts.read += 1;
        } else {
            counts.unread += 1;
        }
        match alert.alert_type {
            AlertType::Critical => counts.critical += 1,
            AlertType::Warning => counts.warning += 1,
            AlertType::Info => {}
        }
    }
    counts
}

/// Count summary for the event feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub total: usize,
    pub by_permission: HashMap<PermissionKind, usize>,
}

/// Reduce an event collection to totals per permission kind.
pub fn event_counts(events: &[PermissionEvent]) -> EventCounts {
    let mut counts = EventCounts {
        total: events.len(),
        ..EventCounts::default()
    };
    for event in events {
        *counts.by_permission.entry(event.permission).or_insert(0) += 1;
    }
    counts
}

/// Domains with the most events, descending, for the dashboard's
/// top-domains card. Ties break alphabetically so output is deterministic.
pub fn top_domains(events: &[PermissionEvent], limit: usize) -> Vec<(String, usize)> {
    let mut per_domain: HashMap<&str, usize> = HashMap::new();
    for event in events {
        *per_domain.entry(event.domain.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = per_domain
        .into_iter()
        .map(|(d, n)| (d.to_string(), n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
