//! Property-based tests for the aggregation layer.
//!
//! Filtering is idempotent and order-preserving; sorting is descending
//! and stable.

use privacyguard::services::aggregation::{
    filter_events, sort_insights, InsightSortKey, PermissionFilter,
};
use privacyguard::types::insight::WebsiteInsight;
use privacyguard::types::permission::{
    DeviceType, PermissionEvent, PermissionKind, PermissionStatus,
};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = PermissionKind> {
    prop::sample::select(PermissionKind::ALL.to_vec())
}

fn arb_event() -> impl Strategy<Value = PermissionEvent> {
    (
        "[a-z]{1,8}",
        prop::sample::select(vec!["a.com", "b.com", "youtube.com", "zoom.us"]),
        arb_kind(),
        0i64..2_000_000_000,
    )
        .prop_map(|(id, domain, permission, timestamp)| PermissionEvent {
            id,
            domain: domain.to_string(),
            permission,
            timestamp,
            duration: None,
            device_type: DeviceType::Desktop,
            status: PermissionStatus::Granted,
        })
}

fn arb_insight() -> impl Strategy<Value = WebsiteInsight> {
    ("[a-z]{1,8}", 0u8..=100, 0u32..1000, 0i64..2_000_000_000).prop_map(
        |(id, risk_score, visit_count, last_activity)| WebsiteInsight {
            id: id.clone(),
            domain: format!("{}.com", id),
            tracker_count: 0,
            permission_usage: 0,
            last_activity,
            risk_score,
            visit_count,
            permissions: Vec::new(),
        },
    )
}

proptest! {
    #[test]
    fn filtering_twice_equals_filtering_once(
        events in prop::collection::vec(arb_event(), 0..40),
        search in "[a-z]{0,4}",
        kind in arb_kind(),
    ) {
        for filter in [PermissionFilter::All, PermissionFilter::Only(kind)] {
            let once = filter_events(&events, &search, &filter);
            let twice = filter_events(&once, &search, &filter);
            prop_assert_eq!(&once, &twice);
        }
    }

    #[test]
    fn filtered_events_form_a_subsequence(
        events in prop::collection::vec(arb_event(), 0..40),
        search in "[a-z]{0,4}",
    ) {
        let filtered = filter_events(&events, &search, &PermissionFilter::All);
        // Every output event appears in the input, in the same relative order.
        let mut cursor = 0;
        for event in &filtered {
            let found = events[cursor..].iter().position(|e| e == event);
            prop_assert!(found.is_some());
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn sorted_risk_scores_are_non_increasing(
        insights in prop::collection::vec(arb_insight(), 0..30),
    ) {
        let sorted = sort_insights(&insights, InsightSortKey::RiskScore);
        prop_assert_eq!(sorted.len(), insights.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].risk_score >= pair[1].risk_score);
        }
    }

    #[test]
    fn sort_preserves_relative_order_of_ties(
        insights in prop::collection::vec(arb_insight(), 0..30),
    ) {
        let sorted = sort_insights(&insights, InsightSortKey::VisitCount);
        // Among insights with equal visit counts, input order survives.
        for count in sorted.iter().map(|i| i.visit_count) {
            let input_ids: Vec<&str> = insights
                .iter()
                .filter(|i| i.visit_count == count)
                .map(|i| i.id.as_str())
                .collect();
            let output_ids: Vec<&str> = sorted
                .iter()
                .filter(|i| i.visit_count == count)
                .map(|i| i.id.as_str())
                .collect();
            prop_assert_eq!(input_ids, output_ids);
        }
    }
}
