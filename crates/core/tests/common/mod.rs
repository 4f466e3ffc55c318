//! Shared test helpers for `aff_toolchain_core` integration tests.
//!
//! The external grammar is out of scope, so fixtures are built
//! programmatically. Every built node gets a fresh, distinct span so
//! tests can assert on diagnostic placement and related-info locations.

#![allow(unreachable_pub)]
#![allow(dead_code)]

use aff_toolchain_core::chart::{
    ArcEvent, ArcLineKind, ArcTapEvent, CameraEvent, Chart, HoldEvent, Item, Metadata,
    MetadataEntry, SceneControlEvent, Sp, TapEvent, TimingEvent, TimingGroupEvent, Value,
};
use aff_toolchain_core::{CheckerRun, Difficulty, ValidationResult, validate};
use aff_toolchain_diagnostics::{Diagnostic, Span};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_SPAN: AtomicUsize = AtomicUsize::new(0);

/// A fresh, distinct span for each built node.
pub fn fresh_span() -> Span {
    let start = NEXT_SPAN.fetch_add(16, Ordering::Relaxed);
    Span::new(start, start + 8)
}

/// Wrap a value with a fresh span.
pub fn sp<T>(value: T) -> Sp<T> {
    Sp::new(value, fresh_span())
}

// ── Chart builders ──────────────────────────────────────────────────────

/// Metadata block from `(key, value)` pairs.
pub fn metadata(entries: &[(&str, &str)]) -> Metadata {
    Metadata {
        entries: entries
            .iter()
            .map(|&(key, value)| MetadataEntry {
                key: sp(key.to_owned()),
                value: sp(value.to_owned()),
            })
            .collect(),
        end_span: fresh_span(),
    }
}

/// A chart with an `AudioOffset:0` header and the given items.
pub fn chart(items: Vec<Item>) -> Chart {
    Chart {
        metadata: metadata(&[("AudioOffset", "0")]),
        items,
    }
}

/// A chart whose body starts with a zero-time timing anchor, which keeps
/// the timing checker quiet for tests focused elsewhere.
pub fn anchored_chart(extra: Vec<Item>) -> Chart {
    let mut items = vec![timing(0, 120.0, 4.0)];
    items.extend(extra);
    chart(items)
}

pub fn timing(time: i64, bpm: f64, segment: f64) -> Item {
    Item::Timing(TimingEvent {
        span: fresh_span(),
        time: sp(time),
        bpm: sp(bpm),
        segment: sp(segment),
    })
}

pub fn tap(time: i64, lane: i64) -> Item {
    Item::Tap(TapEvent {
        span: fresh_span(),
        time: sp(time),
        lane: sp(lane),
    })
}

pub fn hold(start: i64, end: i64, lane: i64) -> Item {
    Item::Hold(HoldEvent {
        span: fresh_span(),
        start: sp(start),
        end: sp(end),
        lane: sp(lane),
    })
}

/// A solid `s`-curve arc with color 0 and no effect; tweak the returned
/// event for anything else.
pub fn arc_event(start: i64, end: i64, from: (f64, f64), to: (f64, f64)) -> ArcEvent {
    ArcEvent {
        span: fresh_span(),
        start: sp(start),
        end: sp(end),
        x_start: sp(from.0),
        x_end: sp(to.0),
        curve: sp("s".to_owned()),
        y_start: sp(from.1),
        y_end: sp(to.1),
        color: sp(0),
        effect: sp("none".to_owned()),
        line_kind: sp(ArcLineKind::False),
        smoothness: None,
        arctaps: None,
    }
}

pub fn arc(start: i64, end: i64, from: (f64, f64), to: (f64, f64)) -> Item {
    Item::Arc(arc_event(start, end, from, to))
}

/// A tracking (black-line) arc.
pub fn tracking_arc(start: i64, end: i64, from: (f64, f64), to: (f64, f64)) -> Item {
    let mut event = arc_event(start, end, from, to);
    event.line_kind = sp(ArcLineKind::True);
    Item::Arc(event)
}

pub fn arctap(time: i64) -> ArcTapEvent {
    ArcTapEvent {
        span: fresh_span(),
        time: sp(time),
    }
}

pub fn camera(time: i64, duration: i64) -> Item {
    Item::Camera(CameraEvent {
        span: fresh_span(),
        time: sp(time),
        x: sp(0.0),
        y: sp(0.0),
        z: sp(0.0),
        xoy: sp(0.0),
        yoz: sp(0.0),
        xoz: sp(0.0),
        easing: sp("l".to_owned()),
        duration: sp(duration),
    })
}

pub fn vint(value: i64) -> Value {
    Value::Int { value }
}

pub fn vfloat(value: f64) -> Value {
    Value::Float { value }
}

pub fn scenecontrol(time: i64, kind: &str, values: Vec<Value>) -> Item {
    Item::SceneControl(SceneControlEvent {
        span: fresh_span(),
        time: sp(time),
        scene_kind: sp(kind.to_owned()),
        values: sp(values.into_iter().map(sp).collect()),
    })
}

/// A well-formed `enwidenlanes` toggle.
pub fn enwiden_lanes(time: i64, on: bool) -> Item {
    scenecontrol(time, "enwidenlanes", vec![vfloat(1.0), vint(i64::from(on))])
}

/// A well-formed `enwidencamera` toggle.
pub fn enwiden_camera(time: i64, on: bool) -> Item {
    scenecontrol(time, "enwidencamera", vec![vfloat(1.0), vint(i64::from(on))])
}

pub fn group(attribute: &str, items: Vec<Item>) -> Item {
    Item::TimingGroup(TimingGroupEvent {
        span: fresh_span(),
        tag_span: fresh_span(),
        attribute: sp(attribute.to_owned()),
        items,
    })
}

/// A group whose own scope is timing-anchored.
pub fn anchored_group(attribute: &str, extra: Vec<Item>) -> Item {
    let mut items = vec![timing(0, 120.0, 4.0)];
    items.extend(extra);
    group(attribute, items)
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Validate with the default run (FTR, standard geometry).
pub fn run(chart: &Chart) -> ValidationResult {
    validate(chart, &CheckerRun::default())
}

/// Validate at a specific difficulty.
pub fn run_at(chart: &Chart, difficulty: Difficulty) -> ValidationResult {
    validate(
        chart,
        &CheckerRun {
            difficulty,
            ..CheckerRun::default()
        },
    )
}

/// All diagnostic codes, in emission order.
pub fn codes_of(issues: &[Diagnostic]) -> Vec<&str> {
    issues.iter().map(|d| d.id.as_ref()).collect()
}

/// Number of diagnostics with the given code.
pub fn count_code(issues: &[Diagnostic], code: &str) -> usize {
    issues.iter().filter(|d| d.id == code).count()
}

/// First diagnostic with the given code.
pub fn find_code<'a>(issues: &'a [Diagnostic], code: &str) -> Option<&'a Diagnostic> {
    issues.iter().find(|d| d.id == code)
}
