// PrivacyGuard state managers
// Managers own the mutable session state: the live feed, alerts, settings.

pub mod alert_center;
pub mod feed_manager;
pub mod settings_store;
