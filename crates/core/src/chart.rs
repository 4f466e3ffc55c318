//! The located chart tree consumed by the semantic checkers.
//!
//! This model is produced by an external parser and delivered to the
//! validator fully located: every item and every leaf field carries the
//! byte span of its source text so diagnostics can point back into the
//! chart file. The validator never mutates a [`Chart`].

use aff_toolchain_diagnostics::Span;
use serde::{Deserialize, Serialize};

/// A located leaf value: the parsed value plus the span of its source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sp<T> {
    /// The parsed value.
    pub value: T,
    /// Source span of the value's text.
    pub span: Span,
}

impl<T> Sp<T> {
    /// Create a located value.
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

/// A parsed AFF chart: the key/value metadata header plus the ordered
/// item sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    /// The metadata header block.
    pub metadata: Metadata,
    /// Ordered top-level items (the "outside timing groups" scope).
    pub items: Vec<Item>,
}

/// The chart's key/value metadata header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// Header entries in source order.
    pub entries: Vec<MetadataEntry>,
    /// Location of the end of the metadata block. Used as the anchor for
    /// whole-chart diagnostics that have no better location.
    pub end_span: Span,
}

impl Metadata {
    /// First entry with the given key, if any.
    pub fn get(&self, key: &str) -> Option<&MetadataEntry> {
        self.entries.iter().find(|e| e.key.value == key)
    }
}

/// One `Key:Value` line of the metadata header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataEntry {
    /// The entry key.
    pub key: Sp<String>,
    /// The entry value, uninterpreted.
    pub value: Sp<String>,
}

/// A chart item. Closed sum over every AFF item kind; checkers match
/// exhaustively so a new kind is a compile-time obligation everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    /// A timing anchor: bpm and beats-per-segment from a time onward.
    Timing(TimingEvent),
    /// A floor tap note.
    Tap(TapEvent),
    /// A floor hold note.
    Hold(HoldEvent),
    /// A directional arc, optionally carrying arctap sub-events.
    Arc(ArcEvent),
    /// A camera move.
    Camera(CameraEvent),
    /// A scene-control event (kind tag plus typed value list).
    SceneControl(SceneControlEvent),
    /// A timing group: an attribute string and a nested item sequence.
    TimingGroup(TimingGroupEvent),
}

impl Item {
    /// Source span of the whole item.
    pub fn span(&self) -> Span {
        match self {
            Item::Timing(e) => e.span,
            Item::Tap(e) => e.span,
            Item::Hold(e) => e.span,
            Item::Arc(e) => e.span,
            Item::Camera(e) => e.span,
            Item::SceneControl(e) => e.span,
            Item::TimingGroup(e) => e.span,
        }
    }
}

/// `timing(time,bpm,segment)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Anchor time in milliseconds.
    pub time: Sp<i64>,
    /// Beats per minute from this anchor onward.
    pub bpm: Sp<f64>,
    /// Beats per segment (time signature numerator).
    pub segment: Sp<f64>,
}

/// `(time,lane)` floor tap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TapEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Hit time in milliseconds.
    pub time: Sp<i64>,
    /// Lane number. 1–4 always exist; 0 and 5 only while enwidenlanes is on.
    pub lane: Sp<i64>,
}

/// `hold(start,end,lane)` floor hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Start time in milliseconds.
    pub start: Sp<i64>,
    /// End time in milliseconds.
    pub end: Sp<i64>,
    /// Lane number, as for [`TapEvent::lane`].
    pub lane: Sp<i64>,
}

/// Whether an arc renders as a solid note or a dashed tracking line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArcLineKind {
    /// `true` in source: a tracking (black/dashed) guide line.
    True,
    /// `false` in source: a solid, playable arc note.
    False,
}

impl ArcLineKind {
    /// `true` when the arc is a tracking line rather than a solid note.
    pub fn is_line(self) -> bool {
        matches!(self, ArcLineKind::True)
    }
}

/// `arc(start,end,xStart,xEnd,curve,yStart,yEnd,color,effect,lineKind)[arctaps]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArcEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Start time in milliseconds.
    pub start: Sp<i64>,
    /// End time in milliseconds.
    pub end: Sp<i64>,
    /// Start x coordinate (0 = left lane center, 1 = right lane center).
    pub x_start: Sp<f64>,
    /// End x coordinate.
    pub x_end: Sp<f64>,
    /// Curve kind (`b`, `s`, `si`, `so`, ...); only `s` is meaningful for
    /// zero-length arcs.
    pub curve: Sp<String>,
    /// Start y coordinate (0 = floor, 1 = sky input line).
    pub y_start: Sp<f64>,
    /// End y coordinate.
    pub y_end: Sp<f64>,
    /// Color id (0 blue, 1 red, 2 green, 3 white; 4+ reserved).
    pub color: Sp<i64>,
    /// Effect name: `none` or a `*_wav` sound reference.
    pub effect: Sp<String>,
    /// Solid note vs tracking line.
    pub line_kind: Sp<ArcLineKind>,
    /// Optional smoothness parameter; values below 1 are ignored in game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothness: Option<Sp<f64>>,
    /// Optional nested arctap events. The outer span covers the whole
    /// bracketed list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arctaps: Option<Sp<Vec<ArcTapEvent>>>,
}

/// `arctap(time)` nested inside an arc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArcTapEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Hit time in milliseconds; must lie within the parent arc's range.
    pub time: Sp<i64>,
}

/// `camera(time,x,y,z,xoy,yoz,xoz,easing,duration)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Start time in milliseconds.
    pub time: Sp<i64>,
    /// Translation along x.
    pub x: Sp<f64>,
    /// Translation along y.
    pub y: Sp<f64>,
    /// Translation along z.
    pub z: Sp<f64>,
    /// Rotation in the xoy plane, degrees.
    pub xoy: Sp<f64>,
    /// Rotation in the yoz plane, degrees.
    pub yoz: Sp<f64>,
    /// Rotation in the xoz plane, degrees.
    pub xoz: Sp<f64>,
    /// Easing curve name (`l`, `qi`, `qo`, `reset`, ...).
    pub easing: Sp<String>,
    /// Duration of the move in milliseconds.
    pub duration: Sp<i64>,
}

/// A typed scene-control value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Value {
    /// An integer value.
    Int {
        /// The integer payload.
        value: i64,
    },
    /// A floating-point value.
    Float {
        /// The float payload.
        value: f64,
    },
}

impl Value {
    /// The type name used in diagnostics (`"int"` / `"float"`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int { .. } => "int",
            Value::Float { .. } => "float",
        }
    }

    /// The integer payload, if this is an int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int { value } => Some(*value),
            Value::Float { .. } => None,
        }
    }

    /// The float payload, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float { value } => Some(*value),
            Value::Int { .. } => None,
        }
    }
}

/// `scenecontrol(time,kind[,values...])`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneControlEvent {
    /// Span of the whole event.
    pub span: Span,
    /// Event time in milliseconds.
    pub time: Sp<i64>,
    /// The scene-control kind tag (`enwidenlanes`, `trackhide`, ...).
    pub scene_kind: Sp<String>,
    /// Additional values; the outer span covers the whole value list.
    pub values: Sp<Vec<Sp<Value>>>,
}

/// `timinggroup(attribute){ items }`.
///
/// Grouping nests exactly one level deep: the external grammar rejects a
/// `timinggroup` inside another, so `items` holds non-group kinds in any
/// well-formed tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingGroupEvent {
    /// Span of the whole group, tag through closing brace.
    pub span: Span,
    /// Span of the `timinggroup(...)` tag. Used as the scope boundary
    /// location for the group's timing-anchor diagnostics.
    pub tag_span: Span,
    /// The raw attribute string (underscore-separated tokens).
    pub attribute: Sp<String>,
    /// The group's own ordered item sequence.
    pub items: Vec<Item>,
}
