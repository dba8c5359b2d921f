use serde::{Deserialize, Serialize};

use super::permission::PermissionKind;

/// Risk score cutoffs for the Low / Medium / High tiers.
///
/// Invariant (enforced by the settings store): `low <= medium <= high`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskThresholds {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 30,
            medium: 60,
            high: 80,
        }
    }
}

/// Which threshold a `set_threshold` call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdTier {
    Low,
    Medium,
    High,
}

/// Per-permission collection toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataTypeToggles {
    pub camera: bool,
    pub microphone: bool,
    pub location: bool,
    pub storage: bool,
    pub notifications: bool,
}

impl Default for DataTypeToggles {
    fn default() -> Self {
        Self {
            camera: true,
            microphone: true,
            location: true,
            storage: false,
            notifications: true,
        }
    }
}

impl DataTypeToggles {
    pub fn get(&self, kind: PermissionKind) -> bool {
        match kind {
            PermissionKind::Camera => self.camera,
            PermissionKind::Microphone => self.microphone,
            PermissionKind::Location => self.location,
            PermissionKind::Storage => self.storage,
            PermissionKind::Notifications => self.notifications,
        }
    }

    pub fn set(&mut self, kind: PermissionKind, enabled: bool) {
        match kind {
            PermissionKind::Camera => self.camera = enabled,
            PermissionKind::Microphone => self.microphone = enabled,
            PermissionKind::Location => self.location = enabled,
            PermissionKind::Storage => self.storage = enabled,
            PermissionKind::Notifications => self.notifications = enabled,
        }
    }
}

/// User-adjustable monitoring preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorSettings {
    pub risk_thresholds: RiskThresholds,
    pub data_types: DataTypeToggles,
    pub email_reports: bool,
    pub retention_days: u32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            risk_thresholds: RiskThresholds::default(),
            data_types: DataTypeToggles::default(),
            email_reports: true,
            retention_days: 90,
        }
    }
}

/// Partial settings update applied at the session boundary.
///
/// Every recognized field is enumerated explicitly; `None` leaves the
/// current value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettingsUpdate {
    pub low_threshold: Option<u8>,
    pub medium_threshold: Option<u8>,
    pub high_threshold: Option<u8>,
    pub data_types: Option<DataTypeToggles>,
    pub email_reports: Option<bool>,
    pub retention_days: Option<u32>,
}
