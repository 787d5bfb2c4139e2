// src/ui/systems.rs
use bevy::prelude::*;

use crate::matrix::events::{MatrixDataModifiedEvent, MatrixOperationFeedback};
use crate::matrix::resources::MatrixStore;
use crate::ui::elements::editor::state::EditorWindowState;
use crate::ui::UiFeedbackState;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<MatrixOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error.
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Closes a stale in-progress edit when the matrix changed underneath it,
/// e.g. a comparison result replacing the matrix while a cell was open.
pub fn handle_matrix_data_modified(
    mut events: EventReader<MatrixDataModifiedEvent>,
    store: Res<MatrixStore>,
    mut state: ResMut<EditorWindowState>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if let Some(cell) = &state.active_cell {
        let dimension_still_exists = store
            .matrix()
            .is_some_and(|m| m.dimension(&cell.dimension_name).is_some());
        if !dimension_still_exists {
            debug!("Active cell's dimension vanished after matrix change; closing editor.");
            state.clear_cell_edit();
        }
    }
}
