//! Unit tests for error display formatting.

use privacyguard::types::errors::{
    AlertError, ClassificationError, QueryError, SettingsError, SnapshotError,
};

#[test]
fn test_classification_error_display() {
    let err = ClassificationError::InvalidScore(150);
    assert_eq!(err.to_string(), "Invalid risk score: 150 (expected 0-100)");
}

#[test]
fn test_settings_error_display() {
    let err = SettingsError::InvalidThreshold("ordering violated".to_string());
    assert_eq!(err.to_string(), "Invalid risk threshold: ordering violated");
}

#[test]
fn test_alert_error_display() {
    let err = AlertError::NotFound("42".to_string());
    assert_eq!(err.to_string(), "Alert not found: 42");
}

#[test]
fn test_query_error_display() {
    let err = QueryError::UnknownSortKey("trackers".to_string());
    assert_eq!(err.to_string(), "Unknown sort key: trackers");
    let err = QueryError::UnknownFilter("resolved".to_string());
    assert_eq!(err.to_string(), "Unknown filter: resolved");
}

#[test]
fn test_snapshot_error_display() {
    let err = SnapshotError::Serialization("bad value".to_string());
    assert_eq!(err.to_string(), "Snapshot serialization failed: bad value");
    let err = SnapshotError::Io("permission denied".to_string());
    assert_eq!(err.to_string(), "Snapshot write failed: permission denied");
}

#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&ClassificationError::InvalidScore(0));
    assert_error(&SettingsError::InvalidThreshold(String::new()));
    assert_error(&AlertError::NotFound(String::new()));
    assert_error(&QueryError::UnknownFilter(String::new()));
    assert_error(&SnapshotError::Io(String::new()));
}
