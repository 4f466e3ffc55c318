//! Checks that lane 0/5 notes only appear while enwidenlanes is enabled.

use super::CheckerRun;
use crate::chart::{HoldEvent, Item, TapEvent};
use crate::derived::{ChartCache, EnwidenEntry, entry_in_effect};
use aff_toolchain_diagnostics::{Diagnostic, LangText, RelatedInfo, Span, codes, text};

/// The lanes that only exist while enwidenlanes is enabled.
fn is_extra_lane(lane: i64) -> bool {
    lane == 0 || lane == 5
}

fn disabler_note() -> LangText {
    text!(
        en: "The scenecontrol event that disables enwidenlanes",
        zh: "禁用 enwidenlanes 的 scenecontrol 事件",
    )
}

pub(super) fn check(cache: &ChartCache, _run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    let lanes = cache.lanes();
    // Anchor for "widening was never enabled before this note".
    let fallback = cache.chart().metadata.end_span;
    for item in &cache.chart().items {
        match item {
            Item::Tap(tap) => check_tap(tap, lanes, fallback, issues),
            Item::Hold(hold) => check_hold(hold, lanes, fallback, issues),
            _ => {}
        }
    }
}

fn check_tap(
    tap: &TapEvent,
    lanes: &[EnwidenEntry],
    fallback: Span,
    issues: &mut Vec<Diagnostic>,
) {
    let lane = tap.lane.value;
    if !is_extra_lane(lane) {
        return;
    }
    let in_effect = entry_in_effect(lanes, tap.time.value);
    if in_effect.is_some_and(|e| e.enabled) {
        return;
    }
    issues.push(
        Diagnostic::error(
            codes::TAP_ON_DISABLED_LANE,
            text!(
                en: format!(
                    "The tap item on lane {lane} should not be present while \
                     enwidenlanes is disabled"
                ),
                zh: format!("禁用 enwidenlanes 时 {lane} 号轨道不应该出现 tap"),
            ),
            tap.lane.span,
        )
        .with_related(RelatedInfo::new(
            disabler_note(),
            in_effect.map_or(fallback, |e| e.span),
        )),
    );
}

fn check_hold(
    hold: &HoldEvent,
    lanes: &[EnwidenEntry],
    fallback: Span,
    issues: &mut Vec<Diagnostic>,
) {
    let lane = hold.lane.value;
    if !is_extra_lane(lane) {
        return;
    }
    // Entries covering the half-open interval [start, end): from the one
    // in effect at the start through the last toggle strictly before the
    // end. A hold starting before any toggle exists begins in the
    // implicit disabled state, represented by a leading `None`.
    let first = lanes.partition_point(|e| e.time <= hold.start.value);
    let last = lanes.partition_point(|e| e.time < hold.end.value);
    let slice_start = first.saturating_sub(1).min(last);
    let mut disablers: Vec<Option<&EnwidenEntry>> = lanes[slice_start..last]
        .iter()
        .filter(|e| !e.enabled)
        .map(Some)
        .collect();
    if first == 0 {
        disablers.insert(0, None);
    }
    if disablers.is_empty() {
        return;
    }

    let mut diag = Diagnostic::error(
        codes::HOLD_ON_DISABLED_LANE,
        text!(
            en: format!(
                "The hold item on lane {lane} should not be present while \
                 enwidenlanes is disabled"
            ),
            zh: format!("禁用 enwidenlanes 时 {lane} 号轨道不应该出现 hold"),
        ),
        hold.lane.span,
    );
    for disabler in disablers {
        diag = diag.with_related(RelatedInfo::new(
            disabler_note(),
            disabler.map_or(fallback, |e| e.span),
        ));
    }
    issues.push(diag);
}
