//! AFF toolchain core library.
//!
//! Provides the located chart tree model and the semantic validator for
//! Arcaea AFF chart files. The main entry points are [`chart_from_json`]
//! for loading a tree produced by the external grammar, and [`validate`]
//! for running the full checker set over it.
//!
//! Validation is a pure, synchronous pass: it never mutates the tree and
//! always completes with a (possibly empty) diagnostic list.

#![warn(missing_docs)]

/// The located chart tree model.
pub mod chart;
/// Derived datasets memoized per validation pass.
pub mod derived;
/// Chart difficulty classes.
pub mod difficulty;
/// JSON (de)serialization of chart trees.
pub mod dump;
/// The semantic checkers and the validation entry point.
pub mod validate;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Tree model
pub use chart::{Chart, Item, Metadata, Sp, Value};

// Difficulty
pub use difficulty::Difficulty;

// Derived data
pub use derived::ChartCache;

// Serialization helpers
pub use dump::{ChartError, chart_from_json, chart_from_json_file, to_pretty_json};

// Validator
pub use validate::{CheckerRun, ValidationResult, filter_by_level, validate};

// Diagnostics (re-exported from the diagnostics crate)
pub use aff_toolchain_diagnostics::{Diagnostic, Lang, LangText, Severity, Span, codes};
