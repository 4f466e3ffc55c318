//! Stable diagnostic ID constants for the AFF semantic checkers.
//!
//! IDs are grouped by hundreds per checker area and never reused once
//! published, so downstream tooling can filter and suppress by code.

// ── Timing anchors (AFF11xx) ────────────────────────────────────────────

/// Two timing events at the same time within one scope.
pub const DUPLICATE_TIMING: &str = "AFF1101";
/// A scope declares no timing event at all.
pub const NO_TIMING: &str = "AFF1102";
/// A scope has timing events but none at time 0.
pub const NO_ZERO_TIMING: &str = "AFF1103";
/// The first item of a scope is not its zero-time timing event.
pub const FIRST_ITEM_NOT_ZERO_TIMING: &str = "AFF1104";

// ── Metadata (AFF12xx) ──────────────────────────────────────────────────

/// Metadata key outside the recognized set.
pub const UNKNOWN_METADATA_KEY: &str = "AFF1201";
/// `AudioOffset` metadata entry is missing.
pub const AUDIO_OFFSET_MISSING: &str = "AFF1202";
/// `AudioOffset` value is not an integer literal.
pub const AUDIO_OFFSET_NOT_INT: &str = "AFF1203";
/// `TimingPointDensityFactor` value is not a float literal.
pub const DENSITY_FACTOR_NOT_FLOAT: &str = "AFF1204";
/// `TimingPointDensityFactor` value is not positive.
pub const DENSITY_FACTOR_NOT_POSITIVE: &str = "AFF1205";

// ── Scenecontrol shape (AFF13xx) ────────────────────────────────────────

/// Scenecontrol event has the wrong number of additional values.
pub const SCENECONTROL_VALUE_COUNT: &str = "AFF1301";
/// Scenecontrol additional value has the wrong type.
pub const SCENECONTROL_VALUE_TYPE: &str = "AFF1302";
/// Scenecontrol kind is not recognized; values go unchecked.
pub const SCENECONTROL_UNKNOWN_KIND: &str = "AFF1303";

// ── Timing groups (AFF14xx) ─────────────────────────────────────────────

/// Timinggroup attribute contains unrecognized tokens.
pub const UNKNOWN_GROUP_ATTRIBUTE: &str = "AFF1401";

// ── Arc geometry (AFF21xx) ──────────────────────────────────────────────

/// Arc endpoint lies outside the playfield trapezoid.
pub const ARC_OUT_OF_FIELD: &str = "AFF2101";

// ── Extra lanes (AFF22xx) ───────────────────────────────────────────────

/// Tap on lane 0/5 while enwidenlanes is disabled.
pub const TAP_ON_DISABLED_LANE: &str = "AFF2201";
/// Hold on lane 0/5 overlapping a span where enwidenlanes is disabled.
pub const HOLD_ON_DISABLED_LANE: &str = "AFF2202";

// ── Value ranges (AFF23xx) ──────────────────────────────────────────────

/// Negative timestamp on any event.
pub const NEGATIVE_TIMESTAMP: &str = "AFF2301";
/// Timing event with non-zero bpm but zero beats per segment.
pub const TIMING_SEGMENT_ZERO: &str = "AFF2302";
/// Timing event with zero bpm but non-zero beats per segment.
pub const TIMING_BPM_ZERO_SEGMENT: &str = "AFF2303";
/// Hold event whose start is not strictly before its end.
pub const HOLD_NOT_POSITIVE: &str = "AFF2304";
/// Arc event whose start is after its end.
pub const ARC_NEGATIVE_LENGTH: &str = "AFF2305";
/// Zero-length arc with identical start and end points.
pub const ZERO_ARC_SAME_POSITION: &str = "AFF2306";
/// Zero-length arc with a curve kind other than `s`.
pub const ZERO_ARC_CURVE: &str = "AFF2307";
/// Zero-length arc carrying arctap events.
pub const ZERO_ARC_WITH_ARCTAPS: &str = "AFF2308";
/// Arc effect name outside the recognized set.
pub const UNKNOWN_ARC_EFFECT: &str = "AFF2309";
/// Arc declared solid but carrying arctap events.
pub const SOLID_ARC_WITH_ARCTAPS: &str = "AFF2310";
/// Solid arc using a reserved color id.
pub const SOLID_ARC_COLOR: &str = "AFF2311";
/// Arc smoothness below 1 is ignored by the game.
pub const ARC_SMOOTHNESS_IGNORED: &str = "AFF2312";
/// Arctap outside its parent arc's time range.
pub const ARCTAP_OUT_OF_PARENT: &str = "AFF2313";
/// Camera event with negative duration.
pub const CAMERA_NEGATIVE_DURATION: &str = "AFF2314";
/// Enwiden/trackdisplay scenecontrol with non-positive duration.
pub const SCENECONTROL_NONPOSITIVE_DURATION: &str = "AFF2315";
