// PrivacyGuard shared type definitions
// Each submodule defines types used across the monitoring core.

pub mod alert;
pub mod errors;
pub mod insight;
pub mod permission;
pub mod score;
pub mod settings;
