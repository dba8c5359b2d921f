//! Unit tests for the Settings Store.

use privacyguard::managers::settings_store::{
    SettingsStore, RETENTION_MAX_DAYS, RETENTION_MIN_DAYS,
};
use privacyguard::types::permission::PermissionKind;
use privacyguard::types::settings::{MonitorSettings, SettingsUpdate, ThresholdTier};

#[test]
fn test_default_settings() {
    let store = SettingsStore::default();
    let settings = store.settings();
    assert_eq!(settings.risk_thresholds.low, 30);
    assert_eq!(settings.risk_thresholds.medium, 60);
    assert_eq!(settings.risk_thresholds.high, 80);
    assert!(settings.data_types.camera);
    assert!(settings.data_types.microphone);
    assert!(settings.data_types.location);
    assert!(!settings.data_types.storage);
    assert!(settings.data_types.notifications);
    assert!(settings.email_reports);
    assert_eq!(settings.retention_days, 90);
}

#[test]
fn test_set_threshold_in_order() {
    let mut store = SettingsStore::default();
    store.set_threshold(ThresholdTier::Medium, 70).unwrap();
    assert_eq!(store.thresholds().medium, 70);
}

#[test]
fn test_set_threshold_clamps_to_100() {
    let mut store = SettingsStore::default();
    store.set_threshold(ThresholdTier::High, 255).unwrap();
    assert_eq!(store.thresholds().high, 100);
}

#[test]
fn test_set_threshold_rejects_ordering_violation() {
    let mut store = SettingsStore::default();
    let before = *store.thresholds();
    assert!(store.set_threshold(ThresholdTier::Low, 95).is_err());
    assert!(store.set_threshold(ThresholdTier::High, 10).is_err());
    assert!(store.set_threshold(ThresholdTier::Medium, 90).is_err());
    // Rejected updates leave the stored thresholds untouched.
    assert_eq!(*store.thresholds(), before);
}

#[test]
fn test_threshold_boundaries_may_be_equal() {
    let mut store = SettingsStore::default();
    store.set_threshold(ThresholdTier::Medium, 80).unwrap();
    store.set_threshold(ThresholdTier::Low, 80).unwrap();
    assert_eq!(store.thresholds().low, 80);
    assert_eq!(store.thresholds().medium, 80);
    assert_eq!(store.thresholds().high, 80);
}

#[test]
fn test_toggle_data_type_flips_independently() {
    let mut store = SettingsStore::default();
    store.toggle_data_type(PermissionKind::Storage);
    assert!(store.settings().data_types.storage);
    store.toggle_data_type(PermissionKind::Storage);
    assert!(!store.settings().data_types.storage);
    // Other toggles are untouched.
    assert!(store.settings().data_types.camera);
}

#[test]
fn test_set_retention_clamps() {
    let mut store = SettingsStore::default();
    store.set_retention(1);
    assert_eq!(store.settings().retention_days, RETENTION_MIN_DAYS);
    store.set_retention(10_000);
    assert_eq!(store.settings().retention_days, RETENTION_MAX_DAYS);
    store.set_retention(30);
    assert_eq!(store.settings().retention_days, 30);
}

#[test]
fn test_set_email_reports() {
    let mut store = SettingsStore::default();
    store.set_email_reports(false);
    assert!(!store.settings().email_reports);
}

#[test]
fn test_apply_partial_update() {
    let mut store = SettingsStore::default();
    store
        .apply(SettingsUpdate {
            medium_threshold: Some(65),
            retention_days: Some(30),
            email_reports: Some(false),
            ..SettingsUpdate::default()
        })
        .unwrap();
    let settings = store.settings();
    assert_eq!(settings.risk_thresholds.medium, 65);
    // Untouched fields keep their values.
    assert_eq!(settings.risk_thresholds.low, 30);
    assert_eq!(settings.risk_thresholds.high, 80);
    assert_eq!(settings.retention_days, 30);
    assert!(!settings.email_reports);
}

#[test]
fn test_apply_rejects_invalid_threshold_combination() {
    let mut store = SettingsStore::default();
    let result = store.apply(SettingsUpdate {
        low_threshold: Some(90),
        ..SettingsUpdate::default()
    });
    assert!(result.is_err());
    assert_eq!(store.thresholds().low, 30);
}

#[test]
fn test_apply_can_raise_all_thresholds_together() {
    // Each intermediate step keeps the ordering valid, so the combined
    // raise goes through.
    let mut store = SettingsStore::new(MonitorSettings::default());
    store
        .apply(SettingsUpdate {
            low_threshold: Some(40),
            medium_threshold: Some(70),
            high_threshold: Some(95),
            ..SettingsUpdate::default()
        })
        .unwrap();
    assert_eq!(store.thresholds().low, 40);
    assert_eq!(store.thresholds().medium, 70);
    assert_eq!(store.thresholds().high, 95);
}
