//! Timing-anchor dataset derived per scope.
//!
//! Each scope (the chart body, or one timing group) carries its own set of
//! timing anchors; scopes never share anchors. The deriver dedupes anchors
//! by time (first seen wins), validates the scope-level invariants, and
//! returns the sorted dataset together with the diagnostics it produced.

use crate::chart::{Chart, Item, TimingGroupEvent};
use aff_toolchain_diagnostics::{Diagnostic, RelatedInfo, Span, codes, text};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// One timing anchor within a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingData {
    /// Anchor time in milliseconds. Unique within the scope.
    pub time: i64,
    /// Beats per minute.
    pub bpm: f64,
    /// Beats per segment.
    pub segment: f64,
    /// Span of the timing event this anchor came from.
    pub span: Span,
}

/// The derived timing dataset for one scope.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingResult {
    /// Anchors sorted ascending by time.
    pub data: Vec<TimingData>,
    /// The scope's attribute tokens: the group attribute split on `_`,
    /// empty for the root scope and for groups with an empty attribute.
    pub attributes: Vec<String>,
    /// Diagnostics found while deriving. Surfaced once by the timing
    /// checker, not by the cache.
    pub issues: Vec<Diagnostic>,
}

/// Which scope is being derived; selects the qualifier wording.
#[derive(Clone, Copy)]
enum ScopeKind {
    Root,
    Group,
}

impl ScopeKind {
    fn qualifier_en(self) -> &'static str {
        match self {
            ScopeKind::Root => "outside timinggroups",
            ScopeKind::Group => "in the timinggroup",
        }
    }

    fn qualifier_zh(self) -> &'static str {
        match self {
            ScopeKind::Root => "外",
            ScopeKind::Group => "内",
        }
    }
}

/// Derive the timing dataset for the chart's top-level scope.
pub(crate) fn derive_root(chart: &Chart) -> TimingResult {
    derive(
        &chart.items,
        chart.metadata.end_span,
        ScopeKind::Root,
        Vec::new(),
    )
}

/// Derive the timing dataset for one timing group's scope.
pub(crate) fn derive_group(group: &TimingGroupEvent) -> TimingResult {
    let attributes = if group.attribute.value.is_empty() {
        Vec::new()
    } else {
        group
            .attribute
            .value
            .split('_')
            .map(str::to_owned)
            .collect()
    };
    derive(&group.items, group.tag_span, ScopeKind::Group, attributes)
}

fn derive(
    items: &[Item],
    boundary: Span,
    scope: ScopeKind,
    attributes: Vec<String>,
) -> TimingResult {
    let mut issues = Vec::new();
    let mut anchors: BTreeMap<i64, TimingData> = BTreeMap::new();

    for item in items {
        let Item::Timing(event) = item else {
            continue;
        };
        match anchors.entry(event.time.value) {
            Entry::Occupied(earlier) => {
                issues.push(
                    Diagnostic::error(
                        codes::DUPLICATE_TIMING,
                        text!(
                            en: "Another timing at this time is defined previously",
                            zh: "此时间点已定义过 timing",
                        ),
                        event.span,
                    )
                    .with_related(RelatedInfo::new(
                        text!(en: "Previous timing definition", zh: "已有 timing"),
                        earlier.get().span,
                    )),
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(TimingData {
                    time: event.time.value,
                    bpm: event.bpm.value,
                    segment: event.segment.value,
                    span: event.span,
                });
            }
        }
    }

    if anchors.is_empty() {
        issues.push(Diagnostic::error(
            codes::NO_TIMING,
            text!(
                en: format!("No timing event found {}", scope.qualifier_en()),
                zh: format!("时间组{}应至少声明一个 timing", scope.qualifier_zh()),
            ),
            boundary,
        ));
    } else if !anchors.contains_key(&0) {
        issues.push(Diagnostic::warning(
            codes::NO_ZERO_TIMING,
            text!(
                en: format!("No timing event at 0 time found {}", scope.qualifier_en()),
                zh: format!("时间组{}应声明一个时间点为 0ms 的 timing", scope.qualifier_zh()),
            ),
            boundary,
        ));
    } else {
        let first_is_zero_timing = matches!(
            items.first(),
            Some(Item::Timing(event)) if event.time.value == 0
        );
        if !first_is_zero_timing {
            issues.push(Diagnostic::info(
                codes::FIRST_ITEM_NOT_ZERO_TIMING,
                text!(
                    en: format!(
                        "First item {} is not timing event at 0 time",
                        scope.qualifier_en()
                    ),
                    zh: format!(
                        "时间组{}的第一个事件应是时间点为 0ms 的 timing",
                        scope.qualifier_zh()
                    ),
                ),
                boundary,
            ));
        }
    }

    TimingResult {
        // BTreeMap iteration is already ascending by time.
        data: anchors.into_values().collect(),
        attributes,
        issues,
    }
}
