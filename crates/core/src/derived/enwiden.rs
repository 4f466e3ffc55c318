//! Widening-state timelines derived from scene-control events.
//!
//! `enwidencamera` and `enwidenlanes` each toggle a chart-global step
//! function over time. The deriver collects every well-formed toggle from
//! both scopes (widening is not scoped to timing groups) into a
//! time-sorted timeline; consumers query the state in effect at a given
//! instant with [`entry_in_effect`] / [`enabled_at`].

use crate::chart::{Chart, Item, SceneControlEvent};
use aff_toolchain_diagnostics::Span;

/// One widening toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct EnwidenEntry {
    /// Toggle time in milliseconds.
    pub time: i64,
    /// State from this toggle onward.
    pub enabled: bool,
    /// Span of the scenecontrol event that produced the toggle.
    pub span: Span,
}

/// The camera and lane widening timelines, each sorted ascending by time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnwidenResult {
    /// `enwidencamera` toggles.
    pub cameras: Vec<EnwidenEntry>,
    /// `enwidenlanes` toggles.
    pub lanes: Vec<EnwidenEntry>,
}

/// Derive both widening timelines from the full tree.
pub(crate) fn derive(chart: &Chart) -> EnwidenResult {
    let mut result = EnwidenResult::default();
    for item in &chart.items {
        match item {
            Item::SceneControl(event) => collect(event, &mut result),
            Item::TimingGroup(group) => {
                for nested in &group.items {
                    if let Item::SceneControl(event) = nested {
                        collect(event, &mut result);
                    }
                }
            }
            _ => {}
        }
    }
    result.cameras.sort_by_key(|e| e.time);
    result.lanes.sort_by_key(|e| e.time);
    result
}

fn collect(event: &SceneControlEvent, result: &mut EnwidenResult) {
    let timeline = match event.scene_kind.value.as_str() {
        "enwidencamera" => &mut result.cameras,
        "enwidenlanes" => &mut result.lanes,
        _ => return,
    };
    // Only well-formed (float, int) pairs make it into the timeline; the
    // scenecontrol checker reports malformed ones.
    let values = &event.values.value;
    if values.len() != 2 || values[0].value.as_float().is_none() {
        return;
    }
    let Some(flag) = values[1].value.as_int() else {
        return;
    };
    timeline.push(EnwidenEntry {
        time: event.time.value,
        enabled: flag != 0,
        span: event.span,
    });
}

/// The toggle in effect at `time`, if any.
///
/// Finds the rightmost entry with `time <= t`; a *disabling* toggle at
/// exactly `t` is treated as not yet applied, so the entry before it wins.
/// An event landing on the disabling instant is therefore still judged
/// under the previously-enabled state. Returns `None` when `time` precedes
/// every toggle (state is disabled by default).
pub fn entry_in_effect(entries: &[EnwidenEntry], time: i64) -> Option<&EnwidenEntry> {
    let mut idx = entries.partition_point(|e| e.time <= time);
    if idx > 0 {
        let last = &entries[idx - 1];
        if !last.enabled && last.time == time {
            idx -= 1;
        }
    }
    idx.checked_sub(1).map(|i| &entries[i])
}

/// The widening state in effect at `time`.
pub fn enabled_at(entries: &[EnwidenEntry], time: i64) -> bool {
    entry_in_effect(entries, time).is_some_and(|e| e.enabled)
}
