//! Diagnostics for the AFF toolchain.
//!
//! Provides the [`Diagnostic`], [`Severity`], [`Span`], and [`LangText`]
//! types used to report chart problems from the semantic checkers.
//! Diagnostic codes are defined in the [`codes`] module.
//!
//! Every message is a two-locale [`LangText`] pair; the checkers always
//! populate both locales and the consumer picks one at display time.

#![warn(missing_docs)]

/// Diagnostic ID constants, grouped by checker area.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

// ── Severity ────────────────────────────────────────────────────────────

/// Severity level for a diagnostic message, ordered
/// `Error > Warning > Information > Hint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard error — the chart is invalid.
    Error,
    /// Warning — the chart may behave unexpectedly in game.
    Warning,
    /// Informational note, advisory only.
    Information,
    /// Hint — lowest-priority advice.
    Hint,
}

impl Severity {
    /// `true` when this severity is at or above `min` in the
    /// `Error > Warning > Information > Hint` ordering.
    pub fn meets(self, min: Severity) -> bool {
        (self as u8) <= (min as u8)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Information => write!(f, "information"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

// ── Span ────────────────────────────────────────────────────────────────

/// Byte span in the chart source text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character (0-based).
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

// ── Localized text ──────────────────────────────────────────────────────

/// Message locale selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

/// A two-locale message pair.
///
/// The checkers fill both locales for every diagnostic; which one is
/// shown is a consumer setting, never decided inside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangText {
    /// English message text.
    pub en: String,
    /// Simplified Chinese message text.
    pub zh: String,
}

impl LangText {
    /// Create a message pair from both locale texts.
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// The text for the given locale.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Zh => &self.zh,
        }
    }
}

/// Shorthand for building a [`LangText`] from both locale texts.
///
/// ```
/// use aff_toolchain_diagnostics::text;
/// let msg = text!(en: "No timing event found", zh: "应至少声明一个 timing");
/// assert_eq!(msg.en, "No timing event found");
/// ```
#[macro_export]
macro_rules! text {
    (en: $en:expr, zh: $zh:expr $(,)?) => {
        $crate::LangText::new($en, $zh)
    };
}

// ── Diagnostic ──────────────────────────────────────────────────────────

/// Secondary evidence attached to a diagnostic (e.g. the earlier of two
/// conflicting definitions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedInfo {
    /// Two-locale description of the related location.
    pub message: LangText,
    /// Source span of the related location.
    pub span: Span,
}

impl RelatedInfo {
    /// Create a related-info record.
    pub fn new(message: LangText, span: Span) -> Self {
        Self { message, span }
    }
}

/// A diagnostic produced by the semantic checkers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"AFF1101"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Two-locale diagnostic message.
    pub message: LangText,
    /// Byte span in the chart source this diagnostic points at.
    pub span: Span,
    /// Related locations providing secondary evidence. Empty for most
    /// diagnostics; serialized only when present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
    /// Machine-readable context for tooling. Keys and values are free-form
    /// strings. Serialized only when present.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: LangText,
        span: Span,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message,
            span,
            related: Vec::new(),
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(id: impl Into<Cow<'static, str>>, message: LangText, span: Span) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Shorthand for a `Warning` diagnostic.
    pub fn warning(id: impl Into<Cow<'static, str>>, message: LangText, span: Span) -> Self {
        Self::new(id, Severity::Warning, message, span)
    }

    /// Shorthand for an `Information` diagnostic.
    pub fn info(id: impl Into<Cow<'static, str>>, message: LangText, span: Span) -> Self {
        Self::new(id, Severity::Information, message, span)
    }

    /// Shorthand for a `Hint` diagnostic.
    pub fn hint(id: impl Into<Cow<'static, str>>, message: LangText, span: Span) -> Self {
        Self::new(id, Severity::Hint, message, span)
    }

    /// Attach a related location (builder pattern, appends).
    pub fn with_related(mut self, related: RelatedInfo) -> Self {
        self.related.push(related);
        self
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Context is a set of key-value string pairs providing structured
    /// details about the diagnostic for tooling, filtering, and
    /// programmatic consumption.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the human-readable explanation for this diagnostic's code,
    /// if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Diagnostic {
    /// Single-locale (English) rendering for logs and error chains.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message.en)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    Some(match id {
        codes::DUPLICATE_TIMING => {
            "Two timing events in the same scope share a time; the game keeps the first and the duplicate is dead data."
        }
        codes::NO_TIMING => {
            "Every scope (the chart body and each timinggroup) must declare at least one timing event to define its tempo."
        }
        codes::NO_ZERO_TIMING => {
            "A scope without a timing event at 0ms has undefined tempo before its first anchor."
        }
        codes::FIRST_ITEM_NOT_ZERO_TIMING => {
            "By convention the first item of a scope is its 0ms timing event; execution order is by time, so this is advisory."
        }
        codes::UNKNOWN_METADATA_KEY => {
            "Only AudioOffset and TimingPointDensityFactor are read from the metadata block; other keys are ignored."
        }
        codes::AUDIO_OFFSET_MISSING => {
            "Without an AudioOffset entry the chart is processed with zero audio offset."
        }
        codes::AUDIO_OFFSET_NOT_INT => "AudioOffset must be an integer number of milliseconds.",
        codes::DENSITY_FACTOR_NOT_FLOAT => "TimingPointDensityFactor must be a float literal.",
        codes::DENSITY_FACTOR_NOT_POSITIVE => "TimingPointDensityFactor must be positive.",
        codes::SCENECONTROL_VALUE_COUNT => {
            "Each recognized scenecontrol kind takes a fixed number of additional values."
        }
        codes::SCENECONTROL_VALUE_TYPE => {
            "Recognized two-value scenecontrol kinds take a float duration followed by an int target value."
        }
        codes::SCENECONTROL_UNKNOWN_KIND => {
            "Unrecognized scenecontrol kinds are tolerated, but their additional values cannot be type-checked."
        }
        codes::UNKNOWN_GROUP_ATTRIBUTE => {
            "Timinggroup attributes are underscore-separated tokens: noinput, fadingholds, or anglex/angley followed by digits."
        }
        codes::ARC_OUT_OF_FIELD => {
            "Arc endpoints must lie inside the playfield trapezoid for the chart's difficulty and the camera-widening state at that time."
        }
        codes::TAP_ON_DISABLED_LANE => {
            "Lanes 0 and 5 only exist while enwidenlanes is enabled; a tap there is unplayable otherwise."
        }
        codes::HOLD_ON_DISABLED_LANE => {
            "A hold on lane 0/5 is unplayable if enwidenlanes is disabled for any part of its span."
        }
        codes::NEGATIVE_TIMESTAMP => "Event timestamps are nonnegative milliseconds.",
        codes::TIMING_SEGMENT_ZERO => {
            "A timing event with non-zero bpm needs a non-zero beats-per-segment value."
        }
        codes::TIMING_BPM_ZERO_SEGMENT => {
            "A timing event with zero bpm conventionally also sets zero beats per segment."
        }
        codes::HOLD_NOT_POSITIVE => "Hold events must have a positive time length.",
        codes::ARC_NEGATIVE_LENGTH => "Arc events must not end before they start.",
        codes::ZERO_ARC_SAME_POSITION => {
            "A zero-length arc renders as a vertical bar and needs distinct start and end points."
        }
        codes::ZERO_ARC_CURVE => "Zero-length arcs conventionally use the \"s\" curve kind.",
        codes::ZERO_ARC_WITH_ARCTAPS => "Zero-length arcs cannot carry arctap events.",
        codes::UNKNOWN_ARC_EFFECT => {
            "Arc effects are \"none\" or a sound file reference ending in \"_wav\"."
        }
        codes::SOLID_ARC_WITH_ARCTAPS => {
            "An arc carrying arctaps is rendered as a tracking (black) line even when declared solid."
        }
        codes::SOLID_ARC_COLOR => "Color ids 4 and above are reserved for tracking arcs.",
        codes::ARC_SMOOTHNESS_IGNORED => "Arc smoothness values below 1 are ignored by the game.",
        codes::ARCTAP_OUT_OF_PARENT => {
            "Arctap events must fall within their parent arc's time range."
        }
        codes::CAMERA_NEGATIVE_DURATION => "Camera events need a nonnegative duration.",
        codes::SCENECONTROL_NONPOSITIVE_DURATION => {
            "Enwiden and trackdisplay scenecontrol events need a positive duration."
        }
        _ => return None,
    })
}
