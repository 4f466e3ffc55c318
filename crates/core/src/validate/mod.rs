//! Semantic validation of chart trees.
//!
//! Each checker walks the tree independently, consulting the per-pass
//! [`ChartCache`] for derived datasets and appending to a shared
//! diagnostic list. Checkers never depend on each other's output and
//! never mutate the tree, so their registration order is irrelevant to
//! the resulting diagnostic set.

pub use aff_toolchain_diagnostics::Diagnostic;
use aff_toolchain_diagnostics::Severity;

use crate::chart::Chart;
use crate::derived::ChartCache;
use crate::difficulty::Difficulty;
use serde::Serialize;

/// Shorthand for building a `BTreeMap<String, String>` context from
/// key-value pairs.
///
/// ```ignore
/// ctx!("kind" => kind, "value" => val)
/// ```
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}
pub(crate) use ctx;

mod arc_position;
mod extra_lanes;
mod metadata;
mod scenecontrol;
mod timing;
mod timinggroup_attribute;
mod value_range;

/// Explicit per-call inputs to a validation pass.
///
/// Both values come from collaborators outside the core (the filename
/// convention and an opt-out directive); they are threaded through as
/// parameters so the core holds no ambient settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerRun {
    /// The chart's difficulty class; selects the playfield geometry.
    pub difficulty: Difficulty,
    /// When set, the arc position checker is skipped entirely and
    /// non-standard ("meme") geometry is tolerated.
    pub allow_custom_geometry: bool,
}

/// One semantic checker: reads the tree and derived data, appends
/// diagnostics.
type Checker = fn(&ChartCache, &CheckerRun, &mut Vec<Diagnostic>);

/// All registered checkers. Order is presentation-only.
const CHECKERS: &[Checker] = &[
    timing::check,
    metadata::check,
    scenecontrol::check,
    timinggroup_attribute::check,
    value_range::check,
    arc_position::check,
    extra_lanes::check,
];

/// Result of validating a chart tree.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// `true` if no errors were found (warnings and below are allowed).
    pub ok: bool,
    /// All diagnostics produced during validation, unordered.
    pub issues: Vec<Diagnostic>,
}

/// Run every registered checker over the tree.
///
/// Pure and synchronous: always completes and returns a (possibly empty)
/// diagnostic list, even for maximally malformed charts. Derived datasets
/// are computed at most once per call and discarded with the pass.
pub fn validate(chart: &Chart, run: &CheckerRun) -> ValidationResult {
    let cache = ChartCache::new(chart);
    let mut issues = Vec::new();
    for checker in CHECKERS {
        checker(&cache, run, &mut issues);
    }
    let ok = !issues.iter().any(|d| d.severity == Severity::Error);
    ValidationResult { ok, issues }
}

/// Keep only diagnostics at or above `min` severity.
///
/// This is the caller-side verbosity filter: the checkers always emit
/// everything and the consumer decides what to show.
pub fn filter_by_level(issues: Vec<Diagnostic>, min: Severity) -> Vec<Diagnostic> {
    issues
        .into_iter()
        .filter(|d| d.severity.meets(min))
        .collect()
}
