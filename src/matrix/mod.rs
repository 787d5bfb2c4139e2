// src/matrix/mod.rs

// --- Public Interface ---
pub mod definitions;
pub mod events;
pub mod export;
pub mod markup;
pub mod plugin;
pub mod resources;
pub mod transpose;

pub(crate) mod systems;

// Re-export the types the UI and collaborators actually touch.
pub use definitions::{Dimension, Document, DocumentId, Matrix};
pub use events::{
    MatrixOperationFeedback, ReplaceMatrixEvent, RequestCsvExport, UpdateInsightRequest,
};
pub use plugin::MatrixPlugin;
pub use resources::{MatrixStore, SortHeuristic};
