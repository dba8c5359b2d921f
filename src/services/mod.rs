// PrivacyGuard services
// Pure transforms over the domain model: classification and aggregation.

pub mod aggregation;
pub mod classification;
