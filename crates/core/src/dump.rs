//! JSON (de)serialization of chart trees.
//!
//! The grammar that turns `.aff` text into a located tree is an external
//! collaborator; it hands trees to this crate in the serialized form read
//! back here.

use crate::chart::Chart;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a serialized chart tree.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Reading the file failed.
    #[error("failed to read chart tree: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization failed.
    #[error("invalid chart tree JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Deserialize a chart tree from JSON text.
pub fn chart_from_json(json: &str) -> Result<Chart, ChartError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and deserialize a chart tree from a JSON file.
pub fn chart_from_json_file(path: impl AsRef<Path>) -> Result<Chart, ChartError> {
    let json = std::fs::read_to_string(path)?;
    chart_from_json(&json)
}

/// Serialize a chart tree to a pretty-printed JSON string.
pub fn to_pretty_json(chart: &Chart) -> String {
    serde_json::to_string_pretty(chart).expect("Chart serialization cannot fail")
}
