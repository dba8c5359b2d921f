//! Settings Store for PrivacyGuard.
//!
//! Holds the user's monitoring preferences and validates every mutation at
//! the boundary: threshold values clamp to 0–100 and must keep the
//! low <= medium <= high ordering, retention clamps into its allowed range,
//! and data-type toggles flip independently.

use crate::types::errors::SettingsError;
use crate::types::permission::PermissionKind;
use crate::types::settings::{MonitorSettings, RiskThresholds, SettingsUpdate, ThresholdTier};

/// Allowed retention range in days.
pub const RETENTION_MIN_DAYS: u32 = 7;
pub const RETENTION_MAX_DAYS: u32 = 365;

/// Validating wrapper around `MonitorSettings`.
pub struct SettingsStore {
    settings: MonitorSettings,
}

impl SettingsStore {
    pub fn new(settings: MonitorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.settings.risk_thresholds
    }

    /// Update one risk threshold.
    ///
    /// The value clamps to 100; an update that would break the
    /// low <= medium <= high ordering is rejected and the stored
    /// thresholds are left unchanged.
    pub fn set_threshold(&mut self, tier: ThresholdTier, value: u8) -> Result<(), SettingsError> {
        let value = value.min(100);
        let mut next = self.settings.risk_thresholds;
        match tier {
            ThresholdTier::Low => next.low = value,
            ThresholdTier::Medium => next.medium = value,
            ThresholdTier::High => next.high = value,
        }
        if next.low > next.medium || next.medium > next.high {
            return Err(SettingsError::InvalidThreshold(format!(
                "ordering violated: low {} <= medium {} <= high {}",
                next.low, next.medium, next.high
            )));
        }
        self.settings.risk_thresholds = next;
        Ok(())
    }

    /// Flip the collection toggle for one permission kind.
    pub fn toggle_data_type(&mut self, kind: PermissionKind) {
        let current = self.settings.data_types.get(kind);
        self.settings.data_types.set(kind, !current);
    }

    pub fn set_email_reports(&mut self, enabled: bool) {
        self.settings.email_reports = enabled;
    }

    /// Set the retention period, clamped into [7, 365] days.
    pub fn set_retention(&mut self, days: u32) {
        self.settings.retention_days = days.clamp(RETENTION_MIN_DAYS, RETENTION_MAX_DAYS);
    }

    /// Apply a partial update field by field, routing every present value
    /// through the validating setters. Stops at the first threshold
    /// ordering violation.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        if let Some(low) = update.low_threshold {
            self.set_threshold(ThresholdTier::Low, low)?;
        }
        if let Some(medium) = update.medium_threshold {
            self.set_threshold(ThresholdTier::Medium, medium)?;
        }
        if let Some(high) = update.high_threshold {
            self.set_threshold(ThresholdTier::High, high)?;
        }
        if let Some(toggles) = update.data_types {
            self.settings.data_types = toggles;
        }
        if let Some(email) = update.email_reports {
            self.settings.email_reports = email;
        }
        if let Some(days) = update.retention_days {
            self.set_retention(days);
        }
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(MonitorSettings::default())
    }
}
