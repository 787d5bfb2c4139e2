// src/matrix/systems/logic/update_insight.rs
use bevy::prelude::*;

use crate::matrix::events::{MatrixDataModifiedEvent, UpdateInsightRequest};
use crate::matrix::resources::MatrixStore;

/// Single mutation entry point for cell commits. A request targeting an
/// unknown dimension or an empty store is a defined no-op (logged, never
/// surfaced as an error).
pub fn handle_update_insight(
    mut events: EventReader<UpdateInsightRequest>,
    mut store: ResMut<MatrixStore>,
    mut data_modified_writer: EventWriter<MatrixDataModifiedEvent>,
) {
    for event in events.read() {
        let applied = store.update_insight(
            event.document_id,
            &event.dimension_name,
            event.new_text.clone(),
        );
        if applied {
            trace!(
                "Committed insight for document {} under '{}'.",
                event.document_id,
                event.dimension_name
            );
            data_modified_writer.write(MatrixDataModifiedEvent);
        } else {
            debug!(
                "Insight commit for document {} under '{}' had no target; skipped.",
                event.document_id, event.dimension_name
            );
        }
    }
}
