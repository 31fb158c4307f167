//! Property-based tests for experiment views
//!
//! - Validated fields reject every out-of-range value and keep the old one
//! - Bucket conversion preserves length, order and source values
//! - Run with ProptestConfig::with_cases(100)

use experiment_views::domain::{Bucket, BucketSource, ExperimentState};
use experiment_views::view::{BucketView, ExperimentView};
use proptest::prelude::*;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Generate a non-empty bucket label
fn arb_label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _-]{1,24}"
}

/// Generate a valid allocation fraction (0.0 inclusive)
fn arb_allocation() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..=1.0, 1.0f64..1e6]
}

/// Generate a strictly negative fraction, from -epsilon to very large
fn arb_negative_allocation() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(-f64::EPSILON),
        Just(-f64::MIN_POSITIVE),
        Just(f64::MIN),
        -1e12f64..-1e-12,
    ]
}

/// Generate a list of valid domain buckets
fn arb_buckets(max: usize) -> impl Strategy<Value = Vec<Bucket>> {
    proptest::collection::vec((arb_label(), any::<bool>(), arb_allocation()), 0..max).prop_map(
        |specs| {
            specs
                .into_iter()
                .map(|(label, control, allocation)| Bucket::new("exp", label, allocation, control))
                .collect()
        },
    )
}

fn empty_view() -> ExperimentView {
    ExperimentView::new("exp", ExperimentState::Running, None, "app", None).unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: valid inputs construct and read back unchanged
    #[test]
    fn prop_bucket_view_accessors_return_inputs(
        label in arb_label(),
        control in any::<bool>(),
        allocation in arb_allocation(),
    ) {
        let view = BucketView::new(label.clone(), control, allocation).unwrap();
        prop_assert_eq!(view.label().as_ref(), label.as_str());
        prop_assert_eq!(view.is_control(), control);
        prop_assert_eq!(view.allocation_percent().to_bits(), allocation.to_bits());
    }

    /// Property: negative allocation fails both on construction and on set
    #[test]
    fn prop_negative_allocation_rejected(
        allocation in arb_negative_allocation(),
        previous in arb_allocation(),
    ) {
        prop_assert!(BucketView::new("A", false, allocation).is_err());

        let mut view = BucketView::new("A", false, previous).unwrap();
        prop_assert!(view.set_allocation_percent(allocation).is_err());
        prop_assert_eq!(view.allocation_percent().to_bits(), previous.to_bits());
    }

    /// Property: negative counts fail and keep the previous count
    #[test]
    fn prop_negative_counts_rejected(
        count in i64::MIN..0,
        previous in 0..i64::MAX,
    ) {
        let mut bucket = BucketView::new("A", false, 0.0).unwrap();
        bucket.set_user_count(previous).unwrap();
        prop_assert!(bucket.set_user_count(count).is_err());
        prop_assert_eq!(bucket.user_count(), previous);

        let mut view = empty_view();
        view.set_total_number_users(previous).unwrap();
        prop_assert!(view.set_total_number_users(count).is_err());
        prop_assert_eq!(view.total_number_users(), previous);
    }

    /// Property: statistics setters accept any value
    #[test]
    fn prop_statistics_unchecked(rate in any::<f64>(), lower in any::<f64>(), upper in any::<f64>()) {
        let mut view = BucketView::new("A", true, 0.5).unwrap();
        view.set_action_rate(rate);
        view.set_lower_bound(lower);
        view.set_upper_bound(upper);
        prop_assert_eq!(view.action_rate().to_bits(), rate.to_bits());
        prop_assert_eq!(view.lower_bound().to_bits(), lower.to_bits());
        prop_assert_eq!(view.upper_bound().to_bits(), upper.to_bits());
    }

    /// Property: conversion keeps length, order and source values
    #[test]
    fn prop_add_buckets_mirrors_source(buckets in arb_buckets(16)) {
        let mut view = empty_view();
        view.add_buckets(&buckets).unwrap();

        let views = view.buckets().unwrap();
        prop_assert_eq!(views.len(), buckets.len());
        for (bucket, bucket_view) in buckets.iter().zip(views) {
            prop_assert_eq!(bucket_view.label(), bucket.label());
            prop_assert_eq!(bucket_view.is_control(), bucket.is_control());
            prop_assert_eq!(
                bucket_view.allocation_percent().to_bits(),
                bucket.allocation_percent().to_bits()
            );
            prop_assert_eq!(bucket_view.action_rate(), 0.0);
            prop_assert_eq!(bucket_view.lower_bound(), 0.0);
            prop_assert_eq!(bucket_view.upper_bound(), 0.0);
            prop_assert_eq!(bucket_view.user_count(), 0);
        }
    }

    /// Property: a second call with the same input replaces, never appends
    #[test]
    fn prop_add_buckets_idempotent(buckets in arb_buckets(16)) {
        let mut once = empty_view();
        once.add_buckets(&buckets).unwrap();

        let mut twice = empty_view();
        twice.add_buckets(&buckets).unwrap();
        twice.add_buckets(&buckets).unwrap();

        prop_assert_eq!(once, twice);
    }

    /// Property: one bad bucket anywhere leaves the installed list untouched
    #[test]
    fn prop_add_buckets_all_or_nothing(
        good in arb_buckets(8),
        bad_at in any::<prop::sample::Index>(),
    ) {
        let mut view = empty_view();
        view.add_buckets(&good).unwrap();
        let before = view.clone();

        let mut input = good.clone();
        let position = bad_at.index(input.len() + 1);
        input.insert(position, Bucket::new("exp", "", 0.5, false));

        prop_assert!(view.add_buckets(&input).is_err());
        prop_assert_eq!(view, before);
    }
}
