//! Alert Center for PrivacyGuard.
//!
//! Owns the in-memory alert collection. Alerts arrive from an upstream
//! detector (seed data in this core); after that the only mutations are
//! the read flag and removal via mark-safe.

use crate::types::alert::{Alert, AlertType};
use crate::types::errors::AlertError;

/// In-memory alert store.
pub struct AlertCenter {
    alerts: Vec<Alert>,
}

impl AlertCenter {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    fn find(&self, alert_id: &str) -> Result<usize, AlertError> {
        self.alerts
            .iter()
            .position(|a| a.id == alert_id)
            .ok_or_else(|| AlertError::NotFound(alert_id.to_string()))
    }

    /// Mark an alert as read. Idempotent: marking an already-read alert is
    /// a no-op. A missing id is `NotFound`.
    pub fn mark_read(&mut self, alert_id: &str) -> Result<(), AlertError> {
        let idx = self.find(alert_id)?;
        self.alerts[idx].is_read = true;
        Ok(())
    }

    /// Remove an alert the user judged safe.
    pub fn mark_safe(&mut self, alert_id: &str) -> Result<(), AlertError> {
        let idx = self.find(alert_id)?;
        self.alerts.remove(idx);
        Ok(())
    }

    /// Acknowledge a snooze request. The upstream detector owns snooze
    /// scheduling; here this only validates the id.
    pub fn snooze(&mut self, alert_id: &str) -> Result<(), AlertError> {
        self.find(alert_id).map(|_| ())
    }

    /// Acknowledge an escalation request; escalation routing is the
    /// upstream detector's responsibility.
    pub fn escalate(&mut self, alert_id: &str) -> Result<(), AlertError> {
        self.find(alert_id).map(|_| ())
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.is_read).count()
    }

    pub fn critical_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.alert_type == AlertType::Critical)
            .count()
    }
}
