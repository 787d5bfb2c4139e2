// src/matrix/events.rs
use bevy::prelude::Event;

use super::definitions::{Dimension, DocumentId};

/// Wholesale matrix replacement, emitted by the comparison-run handler.
/// Installation is atomic and total; a partial matrix is never visible.
#[derive(Event, Debug, Clone)]
pub struct ReplaceMatrixEvent {
    pub dimensions: Vec<Dimension>,
}

/// Single-cell commit from the cell editor. Sent on every normal edit
/// exit, including when the draft equals the previous text.
#[derive(Event, Debug, Clone)]
pub struct UpdateInsightRequest {
    pub document_id: DocumentId,
    pub dimension_name: String,
    pub new_text: String,
}

/// Asks the io systems to serialize the current table and write it to disk.
#[derive(Event, Debug, Clone)]
pub struct RequestCsvExport;

/// Status line feedback surfaced to the UI.
#[derive(Event, Debug, Clone)]
pub struct MatrixOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Fired whenever the store installs a new matrix value (replace or cell
/// commit), so derived views can refresh.
#[derive(Event, Debug, Clone)]
pub struct MatrixDataModifiedEvent;
