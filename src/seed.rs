//! Sample data seeding the dashboard demo and tests.
//!
//! Timestamps are computed relative to the injected `now` so the data
//! reads as recent activity regardless of when it is built.

use crate::types::alert::{Alert, AlertAction, AlertType};
use crate::types::insight::WebsiteInsight;
use crate::types::permission::{DeviceType, PermissionEvent, PermissionKind, PermissionStatus};
use crate::types::score::{PrivacyScore, ScoreTrend};

/// Recent permission events across the sample domains.
pub fn sample_events(now: i64) -> Vec<PermissionEvent> {
    vec![
        PermissionEvent {
            id: "1".to_string(),
            domain: "youtube.com".to_string(),
            permission: PermissionKind::Microphone,
            timestamp: now - 60 * 2,
            duration: Some(45),
            device_type: DeviceType::Desktop,
            status: PermissionStatus::Granted,
        },
        PermissionEvent {
            id: "2".to_string(),
            domain: "instagram.com".to_string(),
            permission: PermissionKind::Location,
            timestamp: now - 60 * 5,
            duration: None,
            device_type: DeviceType::Mobile,
            status: PermissionStatus::Granted,
        },
        PermissionEvent {
            id: "3".to_string(),
            domain: "zoom.us".to_string(),
            permission: PermissionKind::Camera,
            timestamp: now - 60 * 10,
            duration: Some(120),
            device_type: DeviceType::Desktop,
            status: PermissionStatus::Granted,
        },
        PermissionEvent {
            id: "4".to_string(),
            domain: "spotify.com".to_string(),
            permission: PermissionKind::Notifications,
            timestamp: now - 60 * 15,
            duration: None,
            device_type: DeviceType::Desktop,
            status: PermissionStatus::Denied,
        },
    ]
}

/// Per-domain insight profiles. Each insight carries the permission events
/// recorded for its domain.
pub fn sample_insights(now: i64) -> Vec<WebsiteInsight> {
    let events = sample_events(now);
    let for_domain = |domain: &str| -> Vec<PermissionEvent> {
        events.iter().filter(|e| e.domain == domain).cloned().collect()
    };

    vec![
        WebsiteInsight {
            id: "1".to_string(),
            domain: "youtube.com".to_string(),
            tracker_count: 12,
            permission_usage: 8,
            last_activity: now - 60 * 30,
            risk_score: 65,
            visit_count: 45,
            permissions: for_domain("youtube.com"),
        },
        WebsiteInsight {
            id: "2".to_string(),
            domain: "instagram.com".to_string(),
            tracker_count: 18,
            permission_usage: 15,
            last_activity: now - 60 * 60,
            risk_score: 82,
            visit_count: 23,
            permissions: for_domain("instagram.com"),
        },
        WebsiteInsight {
            id: "3".to_string(),
            domain: "zoom.us".to_string(),
            tracker_count: 6,
            permission_usage: 12,
            last_activity: now - 60 * 120,
            risk_score: 45,
            visit_count: 8,
            permissions: for_domain("zoom.us"),
        },
    ]
}

/// Open privacy alerts.
pub fn sample_alerts(now: i64) -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            alert_type: AlertType::Critical,
            title: "Excessive Location Access".to_string(),
            description: "Instagram accessed your location 4 times in 10 minutes in the background"
                .to_string(),
            domain: "instagram.com".to_string(),
            timestamp: now - 60 * 30,
            is_read: false,
            actions: vec![
                AlertAction::Snooze,
                AlertAction::MarkSafe,
                AlertAction::Escalate,
            ],
        },
        Alert {
            id: "2".to_string(),
            alert_type: AlertType::Warning,
            title: "New Tracker Detected".to_string(),
            description: "YouTube is using 3 new tracking methods since your last visit"
                .to_string(),
            domain: "youtube.com".to_string(),
            timestamp: now - 60 * 60,
            is_read: false,
            actions: vec![AlertAction::Snooze, AlertAction::MarkSafe],
        },
    ]
}

/// Current overall privacy score.
pub fn sample_privacy_score(now: i64) -> PrivacyScore {
    PrivacyScore {
        score: 73,
        trend: ScoreTrend::Up,
        last_updated: now,
    }
}
