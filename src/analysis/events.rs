// src/analysis/events.rs
use bevy::prelude::Event;

use crate::matrix::definitions::Dimension;

/// Sent by the UI to start a comparison run over the registered documents.
#[derive(Event, Debug, Clone)]
pub struct RequestComparisonRun {
    /// Comparison dimensions requested by the user, in display order.
    pub dimension_names: Vec<String>,
}

/// Outcome of a comparison run, reported from the background task. On
/// success the payload is the full wire-shape dimension list; the matrix
/// is only ever installed wholesale from here.
#[derive(Event, Debug, Clone)]
pub struct ComparisonRunResult {
    pub result: Result<Vec<Dimension>, String>,
    /// Raw provider response body, kept for the diagnostics panel.
    pub raw_response: Option<String>,
}
