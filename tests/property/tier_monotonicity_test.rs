//! Property-based tests for risk tier classification.
//!
//! For any score in [0,100] and any ordered threshold set, `tier_of` is
//! total and monotonic non-decreasing in the score.

use privacyguard::services::classification::tier_of;
use privacyguard::types::settings::RiskThresholds;
use proptest::prelude::*;

/// Strategy producing thresholds that satisfy low <= medium <= high.
fn arb_thresholds() -> impl Strategy<Value = RiskThresholds> {
    (0u8..=100, 0u8..=100, 0u8..=100).prop_map(|(a, b, c)| {
        let mut values = [a, b, c];
        values.sort_unstable();
        RiskThresholds {
            low: values[0],
            medium: values[1],
            high: values[2],
        }
    })
}

proptest! {
    #[test]
    fn tier_is_total_over_valid_scores(score in 0u8..=100, thresholds in arb_thresholds()) {
        // Any in-range score classifies without error.
        prop_assert!(tier_of(score, &thresholds).is_ok());
    }

    #[test]
    fn tier_is_monotonic_in_score(
        a in 0u8..=100,
        b in 0u8..=100,
        thresholds in arb_thresholds(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let tier_lo = tier_of(lo, &thresholds).unwrap();
        let tier_hi = tier_of(hi, &thresholds).unwrap();
        prop_assert!(tier_lo <= tier_hi);
    }

    #[test]
    fn out_of_range_scores_always_rejected(score in 101u8..=255) {
        prop_assert!(tier_of(score, &RiskThresholds::default()).is_err());
    }
}
