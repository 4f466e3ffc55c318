//! Checks arc endpoints against the playfield trapezoid.
//!
//! The applicable trapezoid depends on the chart difficulty and on the
//! camera-widening state at the endpoint's time. Containment is tested on
//! integer-rounded scaled coordinates; rounding before comparison keeps
//! charts authored exactly on a trapezoid edge inside the field.

use super::CheckerRun;
use super::ctx;
use crate::chart::{ArcEvent, Item};
use crate::derived::{ChartCache, EnwidenEntry, enabled_at};
use crate::difficulty::Difficulty;
use aff_toolchain_diagnostics::{Diagnostic, codes, text};

pub(super) fn check(cache: &ChartCache, run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    if run.allow_custom_geometry {
        return;
    }
    let cameras = cache.cameras();
    for item in &cache.chart().items {
        check_item(item, cameras, run.difficulty, issues);
    }
}

fn check_item(
    item: &Item,
    cameras: &[EnwidenEntry],
    difficulty: Difficulty,
    issues: &mut Vec<Diagnostic>,
) {
    match item {
        Item::Arc(arc) => {
            check_point(PointTag::Start, arc, cameras, difficulty, issues);
            check_point(PointTag::End, arc, cameras, difficulty, issues);
        }
        // Camera widening is chart-global, so the geometry rule does not
        // change inside a group.
        Item::TimingGroup(group) => {
            for nested in &group.items {
                check_item(nested, cameras, difficulty, issues);
            }
        }
        _ => {}
    }
}

#[derive(Clone, Copy)]
enum PointTag {
    Start,
    End,
}

fn check_point(
    tag: PointTag,
    arc: &ArcEvent,
    cameras: &[EnwidenEntry],
    difficulty: Difficulty,
    issues: &mut Vec<Diagnostic>,
) {
    let (x, y, time) = match tag {
        PointTag::Start => (arc.x_start.value, arc.y_start.value, arc.start.value),
        PointTag::End => (arc.x_end.value, arc.y_end.value, arc.end.value),
    };
    let solid = !arc.line_kind.value.is_line();

    let inside = if solid {
        if enabled_at(cameras, time) {
            ENWIDEN_FIELD.contains(x, y)
        } else {
            standard_field(difficulty).contains(x, y)
        }
    } else {
        tracking_field_contains(x, y)
    };
    if inside {
        return;
    }

    let (tag_en, tag_zh) = match tag {
        PointTag::Start => ("start point", "起点"),
        PointTag::End => ("end point", "终点"),
    };
    let (kind_en, kind_zh) = if solid {
        ("solid", "音弧")
    } else {
        ("tracking", "音轨（黑线）")
    };
    let message = text!(
        en: format!("The {tag_en} of the {kind_en} arc is out of the trapezium range"),
        zh: format!("{kind_zh}的{tag_zh}超界"),
    );
    let diag = if solid {
        Diagnostic::warning(codes::ARC_OUT_OF_FIELD, message, arc.span)
    } else {
        Diagnostic::hint(codes::ARC_OUT_OF_FIELD, message, arc.span)
    };
    issues.push(diag.with_context(ctx!(
        "difficulty" => difficulty.to_string(),
        "x" => x.to_string(),
        "y" => y.to_string(),
    )));
}

/// An isosceles-legged trapezoid with its base on y = 0, tested on
/// rounded scaled coordinates: `round(100 y)` against `[0, y_max]` and
/// `round(x_scale x ± xy_scale y)` against the right/left edge bounds.
struct Trapezoid {
    y_max: i64,
    x_scale: f64,
    xy_scale: f64,
    right_max: i64,
    left_min: i64,
}

impl Trapezoid {
    fn contains(&self, x: f64, y: f64) -> bool {
        let scaled_y = (100.0 * y).round() as i64;
        let right = (self.x_scale * x + self.xy_scale * y).round() as i64;
        let left = (self.x_scale * x - self.xy_scale * y).round() as i64;
        scaled_y >= 0 && scaled_y <= self.y_max && right <= self.right_max && left >= self.left_min
    }
}

/// Regular field: (-0.5,0) (1.5,0) (0,1) (1,1).
const STANDARD_FIELD: Trapezoid = Trapezoid {
    y_max: 100,
    x_scale: 200.0,
    xy_scale: 100.0,
    right_max: 300,
    left_min: -100,
};

/// Widened ETR field: (-0.5,0) (1.5,0) (-0.25,1) (1.25,1).
const WIDE_FIELD: Trapezoid = Trapezoid {
    y_max: 100,
    x_scale: 200.0,
    xy_scale: 50.0,
    right_max: 300,
    left_min: -100,
};

/// Tall BYD field: (-0.5,0) (1.5,0) (-0.25,1.5) (1.25,1.5).
const TALL_FIELD: Trapezoid = Trapezoid {
    y_max: 150,
    x_scale: 600.0,
    xy_scale: 100.0,
    right_max: 900,
    left_min: -300,
};

/// Enwiden-camera field: (-1,0) (2,0) (-0.25,1.61) (1.25,1.61).
/// Applies to every difficulty while camera widening is enabled.
const ENWIDEN_FIELD: Trapezoid = Trapezoid {
    y_max: 161,
    x_scale: 16100.0,
    xy_scale: 7500.0,
    right_max: 32200,
    left_min: -16100,
};

fn standard_field(difficulty: Difficulty) -> &'static Trapezoid {
    match difficulty {
        Difficulty::Pst | Difficulty::Prs | Difficulty::Ftr => &STANDARD_FIELD,
        Difficulty::Etr => &WIDE_FIELD,
        Difficulty::Byd => &TALL_FIELD,
    }
}

/// Tracking (black-line) arcs carry no position bound; the predicate
/// exists so the hint branch above stays wired for a future constraint.
fn tracking_field_contains(_x: f64, _y: f64) -> bool {
    true
}
