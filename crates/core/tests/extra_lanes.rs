//! Lane 0/5 occupancy against the enwidenlanes timeline.

mod common;

use aff_toolchain_core::codes;
use common::*;

// ─── Taps ────────────────────────────────────────────────────────────────

#[test]
fn tap_on_extra_lane_without_widening_errors() {
    let chart = anchored_chart(vec![tap(1000, 0)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::TAP_ON_DISABLED_LANE), 1);
    let diag = find_code(&result.issues, codes::TAP_ON_DISABLED_LANE).unwrap();
    // No toggle precedes the tap: the related info falls back to the
    // metadata end.
    assert_eq!(diag.related.len(), 1);
    assert_eq!(diag.related[0].span, chart.metadata.end_span);
}

#[test]
fn tap_on_extra_lane_while_widened_is_fine() {
    let chart = anchored_chart(vec![enwiden_lanes(500, true), tap(1000, 5)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::TAP_ON_DISABLED_LANE), 0);
}

#[test]
fn tap_after_widening_disabled_points_at_the_toggle() {
    let disable = enwiden_lanes(2000, false);
    let disable_span = disable.span();
    let chart = anchored_chart(vec![enwiden_lanes(500, true), disable, tap(3000, 0)]);
    let result = run(&chart);
    let diag = find_code(&result.issues, codes::TAP_ON_DISABLED_LANE).unwrap();
    assert_eq!(diag.related[0].span, disable_span);
}

#[test]
fn tap_exactly_on_the_disabling_instant_is_still_covered() {
    let chart = anchored_chart(vec![
        enwiden_lanes(500, true),
        enwiden_lanes(2000, false),
        tap(2000, 0),
    ]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::TAP_ON_DISABLED_LANE), 0);
}

#[test]
fn regular_lanes_are_never_flagged() {
    let chart = anchored_chart(vec![tap(0, 1), tap(0, 4)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::TAP_ON_DISABLED_LANE), 0);
}

// ─── Holds ───────────────────────────────────────────────────────────────

#[test]
fn hold_fully_inside_a_widened_window_is_fine() {
    let chart = anchored_chart(vec![enwiden_lanes(500, true), hold(1000, 2000, 0)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::HOLD_ON_DISABLED_LANE), 0);
}

#[test]
fn hold_with_no_preceding_toggle_reports_the_implicit_disable() {
    let chart = anchored_chart(vec![hold(1000, 2000, 5)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::HOLD_ON_DISABLED_LANE), 1);
    let diag = find_code(&result.issues, codes::HOLD_ON_DISABLED_LANE).unwrap();
    assert_eq!(diag.related.len(), 1);
    assert_eq!(diag.related[0].span, chart.metadata.end_span);
}

#[test]
fn hold_crossing_a_disable_reports_each_disabler() {
    let disable = enwiden_lanes(1500, false);
    let disable_span = disable.span();
    let chart = anchored_chart(vec![
        enwiden_lanes(500, true),
        disable,
        enwiden_lanes(1800, true),
        hold(1000, 2000, 0),
    ]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::HOLD_ON_DISABLED_LANE), 1);
    let diag = find_code(&result.issues, codes::HOLD_ON_DISABLED_LANE).unwrap();
    assert_eq!(diag.related.len(), 1);
    assert_eq!(diag.related[0].span, disable_span);
}

#[test]
fn hold_is_judged_on_a_half_open_interval() {
    // Disabling exactly at the hold end is outside [start, end).
    let chart = anchored_chart(vec![
        enwiden_lanes(500, true),
        enwiden_lanes(2000, false),
        hold(1000, 2000, 0),
    ]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::HOLD_ON_DISABLED_LANE), 0);
}

#[test]
fn hold_starting_disabled_and_reenabled_mid_span_still_errors() {
    let chart = anchored_chart(vec![enwiden_lanes(1500, true), hold(1000, 2000, 5)]);
    let result = run(&chart);
    // Starts before any toggle: the implicit leading disable applies even
    // though widening turns on mid-hold.
    assert_eq!(count_code(&result.issues, codes::HOLD_ON_DISABLED_LANE), 1);
    let diag = find_code(&result.issues, codes::HOLD_ON_DISABLED_LANE).unwrap();
    assert_eq!(diag.related.len(), 1);
    assert_eq!(diag.related[0].span, chart.metadata.end_span);
}

#[test]
fn hold_on_regular_lane_is_never_flagged() {
    let chart = anchored_chart(vec![hold(1000, 2000, 3)]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::HOLD_ON_DISABLED_LANE), 0);
}
