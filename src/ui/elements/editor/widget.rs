// src/ui/elements/editor/widget.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::matrix::definitions::DocumentId;
use crate::matrix::events::UpdateInsightRequest;

use super::markup_render::render_insight_text;
use super::state::EditorWindowState;

enum EditExit {
    None,
    Commit,
    Cancel,
}

/// One matrix cell. Viewing mode renders the parsed markup and a click
/// starts an edit; editing mode shows a multiline text edit whose draft
/// lives in `EditorWindowState`. Losing focus commits (always, even with
/// an unchanged draft); Escape cancels without touching the store.
pub fn insight_cell_widget(
    ui: &mut egui::Ui,
    id: egui::Id,
    document_id: DocumentId,
    dimension_name: &str,
    current_text: &str,
    state: &mut EditorWindowState,
    update_writer: &mut EventWriter<UpdateInsightRequest>,
) {
    if state.is_editing_cell(document_id, dimension_name) {
        let mut exit = EditExit::None;
        {
            let EditorWindowState {
                edit,
                edit_needs_focus,
                ..
            } = &mut *state;
            if let Some(draft) = edit.draft_mut() {
                let response = ui.add(
                    egui::TextEdit::multiline(draft)
                        .id(id)
                        .desired_width(f32::INFINITY)
                        .desired_rows(3),
                );
                if *edit_needs_focus {
                    response.request_focus();
                    *edit_needs_focus = false;
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    exit = EditExit::Cancel;
                } else if response.lost_focus()
                    || ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter))
                {
                    exit = EditExit::Commit;
                }
            }
        }
        match exit {
            EditExit::Commit => {
                if let Some(new_text) = state.edit.commit() {
                    update_writer.write(UpdateInsightRequest {
                        document_id,
                        dimension_name: dimension_name.to_string(),
                        new_text,
                    });
                }
                state.clear_cell_edit();
            }
            EditExit::Cancel => {
                // Baseline text is what the store still holds; nothing to
                // write back.
                state.edit.cancel();
                state.clear_cell_edit();
            }
            EditExit::None => {}
        }
    } else {
        let response = ui
            .scope(|cell_ui| render_insight_text(cell_ui, current_text))
            .response
            .interact(egui::Sense::click());
        if response.clicked() {
            state.begin_cell_edit(document_id, dimension_name, current_text);
        }
    }
}
