use serde::{Deserialize, Serialize};

/// Browser capabilities a site may request access to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Camera,
    Microphone,
    Location,
    Storage,
    Notifications,
}

impl PermissionKind {
    /// All kinds, in the order the dashboard lists them.
    pub const ALL: [PermissionKind; 5] = [
        PermissionKind::Camera,
        PermissionKind::Microphone,
        PermissionKind::Location,
        PermissionKind::Storage,
        PermissionKind::Notifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKind::Camera => "camera",
            PermissionKind::Microphone => "microphone",
            PermissionKind::Location => "location",
            PermissionKind::Storage => "storage",
            PermissionKind::Notifications => "notifications",
        }
    }
}

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Prompt,
}

impl PermissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
            PermissionStatus::Prompt => "prompt",
        }
    }
}

/// Device class the request originated from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }
}

/// A single permission request observed for a domain.
///
/// Immutable once created; evicted from the live feed when the buffer
/// reaches capacity. `duration` is how long the capability was held,
/// in seconds, when known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PermissionEvent {
    pub id: String,
    pub domain: String,
    pub permission: PermissionKind,
    /// Unix timestamp (seconds).
    pub timestamp: i64,
    pub duration: Option<u32>,
    pub device_type: DeviceType,
    pub status: PermissionStatus,
}
