use serde::{Deserialize, Serialize};

/// Severity class of a privacy alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Warning,
    Critical,
    Info,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Warning => "warning",
            AlertType::Critical => "critical",
            AlertType::Info => "info",
        }
    }

    /// Badge color the dashboard renders for this severity.
    pub fn color(&self) -> &'static str {
        match self {
            AlertType::Critical => "red",
            AlertType::Warning => "yellow",
            AlertType::Info => "blue",
        }
    }
}

/// Actions the user may take on an alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlertAction {
    Snooze,
    MarkSafe,
    Escalate,
}

/// A privacy alert raised against a domain.
///
/// Created by an upstream detector; after creation only `is_read` changes,
/// or the alert is removed entirely when marked safe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    pub alert_type: AlertType,
    pub title: String,
    pub description: String,
    pub domain: String,
    /// Unix timestamp (seconds).
    pub timestamp: i64,
    pub is_read: bool,
    pub actions: Vec<AlertAction>,
}
