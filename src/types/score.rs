use serde::{Deserialize, Serialize};

/// Direction the privacy score has moved since the last update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrend {
    Up,
    Down,
    Stable,
}

/// Overall protection level for the user, 0–100.
///
/// Single current-value object; replaced wholesale on update, never
/// partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivacyScore {
    pub score: u8,
    pub trend: ScoreTrend,
    /// Unix timestamp (seconds).
    pub last_updated: i64,
}
