//! Timing-anchor derivation and its per-scope diagnostics.

mod common;

use aff_toolchain_core::{ChartCache, codes};
use common::*;

// ─── Duplicate anchors ───────────────────────────────────────────────────

#[test]
fn duplicate_timing_reports_later_item_with_earlier_as_related() {
    let first = timing(0, 120.0, 4.0);
    let second = timing(0, 200.0, 4.0);
    let first_span = first.span();
    let second_span = second.span();
    let chart = chart(vec![first, second]);

    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::DUPLICATE_TIMING), 1);
    let diag = find_code(&result.issues, codes::DUPLICATE_TIMING).unwrap();
    assert_eq!(diag.span, second_span, "primary span is the later item");
    assert_eq!(diag.related.len(), 1);
    assert_eq!(
        diag.related[0].span, first_span,
        "related span is the earlier item"
    );
}

#[test]
fn duplicate_timing_first_seen_wins_in_derived_data() {
    let chart = chart(vec![timing(0, 120.0, 4.0), timing(0, 200.0, 8.0)]);
    let cache = ChartCache::new(&chart);
    let data = &cache.root_timing().data;
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].bpm, 120.0);
    assert_eq!(data[0].segment, 4.0);
}

#[test]
fn derived_anchors_are_sorted_and_unique() {
    let chart = chart(vec![
        timing(2000, 90.0, 4.0),
        timing(0, 120.0, 4.0),
        timing(1000, 150.0, 4.0),
        timing(1000, 180.0, 4.0),
    ]);
    let cache = ChartCache::new(&chart);
    let times: Vec<i64> = cache.root_timing().data.iter().map(|t| t.time).collect();
    assert_eq!(times, vec![0, 1000, 2000]);
}

// ─── Scope-level invariants (mutually exclusive) ─────────────────────────

#[test]
fn empty_scope_yields_exactly_one_error() {
    let chart = chart(vec![tap(0, 2)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::NO_TIMING), 1);
    assert_eq!(count_code(&result.issues, codes::NO_ZERO_TIMING), 0);
    assert_eq!(
        count_code(&result.issues, codes::FIRST_ITEM_NOT_ZERO_TIMING),
        0
    );
    let diag = find_code(&result.issues, codes::NO_TIMING).unwrap();
    assert_eq!(
        diag.span, chart.metadata.end_span,
        "root scope anchors at the metadata end"
    );
}

#[test]
fn missing_zero_anchor_yields_exactly_one_warning() {
    let chart = chart(vec![timing(1000, 120.0, 4.0)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::NO_TIMING), 0);
    assert_eq!(count_code(&result.issues, codes::NO_ZERO_TIMING), 1);
    assert_eq!(
        count_code(&result.issues, codes::FIRST_ITEM_NOT_ZERO_TIMING),
        0
    );
}

#[test]
fn zero_anchor_not_first_yields_exactly_one_info() {
    let chart = chart(vec![tap(0, 2), timing(0, 120.0, 4.0)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::NO_TIMING), 0);
    assert_eq!(count_code(&result.issues, codes::NO_ZERO_TIMING), 0);
    assert_eq!(
        count_code(&result.issues, codes::FIRST_ITEM_NOT_ZERO_TIMING),
        1
    );
}

#[test]
fn well_anchored_scope_is_quiet() {
    let chart = anchored_chart(vec![tap(500, 2)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::NO_TIMING), 0);
    assert_eq!(count_code(&result.issues, codes::NO_ZERO_TIMING), 0);
    assert_eq!(
        count_code(&result.issues, codes::FIRST_ITEM_NOT_ZERO_TIMING),
        0
    );
}

// ─── Scopes are independent ──────────────────────────────────────────────

#[test]
fn group_scope_is_validated_independently() {
    let empty_group = group("", vec![tap(0, 2)]);
    let tag_span = match &empty_group {
        aff_toolchain_core::Item::TimingGroup(g) => g.tag_span,
        _ => unreachable!(),
    };
    let chart = anchored_chart(vec![empty_group]);

    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::NO_TIMING), 1);
    let diag = find_code(&result.issues, codes::NO_TIMING).unwrap();
    assert_eq!(diag.span, tag_span, "group scope anchors at its tag");
}

#[test]
fn group_anchors_do_not_leak_into_root_scope() {
    // Root has no timing; the group does. The root still errors.
    let chart = chart(vec![anchored_group("", vec![])]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::NO_TIMING), 1);
}

#[test]
fn same_time_in_different_scopes_is_not_a_duplicate() {
    let chart = anchored_chart(vec![anchored_group("", vec![])]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::DUPLICATE_TIMING), 0);
}

// ─── Attribute tokenization ──────────────────────────────────────────────

#[test]
fn group_attribute_splits_on_underscore() {
    let chart = chart(vec![anchored_group("noinput_fadingholds", vec![])]);
    let cache = ChartCache::new(&chart);
    let result = cache.group_timing(0).unwrap();
    assert_eq!(result.attributes, vec!["noinput", "fadingholds"]);
}

#[test]
fn empty_attribute_has_no_tokens() {
    let chart = chart(vec![anchored_group("", vec![])]);
    let cache = ChartCache::new(&chart);
    assert!(cache.group_timing(0).unwrap().attributes.is_empty());
}

#[test]
fn group_timing_is_none_for_non_group_items() {
    let chart = anchored_chart(vec![]);
    let cache = ChartCache::new(&chart);
    assert!(cache.group_timing(0).is_none());
    assert!(cache.group_timing(99).is_none());
}
