//! Session facade for PrivacyGuard.
//!
//! `MonitorSession` is the single owner of all mutable monitoring state:
//! the live event feed, the insight collection, the alert center, the
//! current privacy score, and the settings store. The presentation layer
//! talks only to this boundary — snapshot accessors for reads, validated
//! mutators for writes — so there are no process-wide singletons.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::managers::alert_center::AlertCenter;
use crate::managers::feed_manager::EventFeed;
use crate::managers::settings_store::SettingsStore;
use crate::seed;
use crate::services::classification::{tier_of, RiskTier};
use crate::types::alert::Alert;
use crate::types::errors::{AlertError, ClassificationError, SettingsError, SnapshotError};
use crate::types::insight::WebsiteInsight;
use crate::types::permission::PermissionEvent;
use crate::types::score::PrivacyScore;
use crate::types::settings::{MonitorSettings, SettingsUpdate};

/// Serializable export of all session collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub events: Vec<PermissionEvent>,
    pub insights: Vec<WebsiteInsight>,
    pub alerts: Vec<Alert>,
    pub privacy_score: PrivacyScore,
    pub settings: MonitorSettings,
}

/// One user's monitoring session.
pub struct MonitorSession {
    feed: EventFeed,
    insights: Vec<WebsiteInsight>,
    alerts: AlertCenter,
    privacy_score: PrivacyScore,
    settings: SettingsStore,
}

impl MonitorSession {
    /// Session seeded with the sample data, timestamped relative to `now`.
    pub fn seeded(now: i64) -> Self {
        let mut feed = EventFeed::new();
        feed.seed(seed::sample_events(now));
        Self {
            feed,
            insights: seed::sample_insights(now),
            alerts: AlertCenter::new(seed::sample_alerts(now)),
            privacy_score: seed::sample_privacy_score(now),
            settings: SettingsStore::default(),
        }
    }

    /// Assemble a session from explicitly constructed parts.
    pub fn with_parts(
        feed: EventFeed,
        insights: Vec<WebsiteInsight>,
        alerts: Vec<Alert>,
        privacy_score: PrivacyScore,
        settings: SettingsStore,
    ) -> Self {
        Self {
            feed,
            insights,
            alerts: AlertCenter::new(alerts),
            privacy_score,
            settings,
        }
    }

    // --- read accessors ---

    /// Live feed, newest first.
    pub fn events(&self) -> &[PermissionEvent] {
        self.feed.events()
    }

    pub fn insights(&self) -> &[WebsiteInsight] {
        &self.insights
    }

    pub fn alerts(&self) -> &[Alert] {
        self.alerts.alerts()
    }

    pub fn privacy_score(&self) -> &PrivacyScore {
        &self.privacy_score
    }

    pub fn settings(&self) -> &MonitorSettings {
        self.settings.settings()
    }

    pub fn feed(&self) -> &EventFeed {
        &self.feed
    }

    pub fn alert_center(&self) -> &AlertCenter {
        &self.alerts
    }

    /// Classify an insight's risk score against the *current* settings
    /// thresholds, so threshold changes take effect immediately.
    pub fn tier_for(&self, insight: &WebsiteInsight) -> Result<RiskTier, ClassificationError> {
        tier_of(insight.risk_score, self.settings.thresholds())
    }

    // --- mutators ---

    pub fn mark_alert_read(&mut self, alert_id: &str) -> Result<(), AlertError> {
        self.alerts.mark_read(alert_id)
    }

    /// "Mark safe": the alert is removed entirely.
    pub fn remove_alert(&mut self, alert_id: &str) -> Result<(), AlertError> {
        self.alerts.mark_safe(alert_id)
    }

    pub fn start_feed(&mut self) {
        self.feed.start();
    }

    pub fn stop_feed(&mut self) {
        self.feed.stop();
    }

    /// Drive one simulator tick; the caller owns the timer.
    pub fn tick_feed(&mut self) -> Option<&PermissionEvent> {
        self.feed.tick()
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        self.settings.apply(update)
    }

    pub fn settings_store_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    /// Replace the privacy score wholesale. Scores above 100 are rejected.
    pub fn set_privacy_score(&mut self, score: PrivacyScore) -> Result<(), ClassificationError> {
        if score.score > 100 {
            return Err(ClassificationError::InvalidScore(score.score as u32));
        }
        self.privacy_score = score;
        Ok(())
    }

    // --- snapshot export ---

    /// Export every collection as a pretty-printed JSON document.
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        let snapshot = SessionSnapshot {
            events: self.feed.events().to_vec(),
            insights: self.insights.clone(),
            alerts: self.alerts.alerts().to_vec(),
            privacy_score: self.privacy_score.clone(),
            settings: self.settings.settings().clone(),
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Write the snapshot JSON to `path`, creating parent directories.
    pub fn export_snapshot_to(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = self.export_snapshot()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Io(e.to_string()))?;
        }
        fs::write(path, json).map_err(|e| SnapshotError::Io(e.to_string()))
    }
}
