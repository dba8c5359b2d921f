use std::fmt;

// === ClassificationError ===

/// Errors related to risk classification.
#[derive(Debug, PartialEq, Eq)]
pub enum ClassificationError {
    /// The supplied score is outside the valid 0–100 range.
    InvalidScore(u32),
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationError::InvalidScore(score) => {
                write!(f, "Invalid risk score: {} (expected 0-100)", score)
            }
        }
    }
}

impl std::error::Error for ClassificationError {}

// === SettingsError ===

/// Errors related to settings updates.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A threshold update would break the low <= medium <= high ordering.
    InvalidThreshold(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidThreshold(msg) => {
                write!(f, "Invalid risk threshold: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AlertError ===

/// Errors related to alert operations.
#[derive(Debug, PartialEq, Eq)]
pub enum AlertError {
    /// Alert with the given ID was not found.
    NotFound(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::NotFound(id) => write!(f, "Alert not found: {}", id),
        }
    }
}

impl std::error::Error for AlertError {}

// === QueryError ===

/// Errors related to filter and sort requests from the presentation layer.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The requested sort key is not supported.
    UnknownSortKey(String),
    /// The requested filter mode is not supported.
    UnknownFilter(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownSortKey(key) => write!(f, "Unknown sort key: {}", key),
            QueryError::UnknownFilter(mode) => write!(f, "Unknown filter: {}", mode),
        }
    }
}

impl std::error::Error for QueryError {}

// === SnapshotError ===

/// Errors related to session snapshot export.
#[derive(Debug)]
pub enum SnapshotError {
    /// Failed to serialize the snapshot.
    Serialization(String),
    /// Failed to write the snapshot to disk.
    Io(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Serialization(msg) => {
                write!(f, "Snapshot serialization failed: {}", msg)
            }
            SnapshotError::Io(msg) => write!(f, "Snapshot write failed: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}
