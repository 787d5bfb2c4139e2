// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::analysis::events::RequestComparisonRun;
use crate::analysis::resources::{ComparisonRunState, SessionApiKey};
use crate::documents::events::RequestAddDocuments;
use crate::documents::resources::DocumentRegistry;
use crate::matrix::events::RequestCsvExport;
use crate::settings::{self, AppSettings};
use crate::ui::UiFeedbackState;

use super::editor::state::EditorWindowState;

#[allow(clippy::too_many_arguments)]
pub fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    settings: &mut AppSettings,
    run_state: &ComparisonRunState,
    session_key: &SessionApiKey,
    registry: &DocumentRegistry,
    ui_feedback: &UiFeedbackState,
    add_documents_writer: &mut EventWriter<RequestAddDocuments>,
    run_writer: &mut EventWriter<RequestComparisonRun>,
    export_writer: &mut EventWriter<RequestCsvExport>,
) {
    ui.horizontal(|ui| {
        if ui.button("Add Documents…").clicked() {
            add_documents_writer.write(RequestAddDocuments);
        }
        if ui.button("Documents Folder…").clicked() {
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                settings.documents_dir = Some(dir);
                if let Err(e) = settings::io::save_settings_to_file(settings) {
                    warn!("Failed to persist settings: {}", e);
                }
            }
        }
        ui.label(format!("{} document(s)", registry.len()));
        ui.separator();

        ui.label("Dimensions:");
        ui.add(
            egui::TextEdit::singleline(&mut state.dimension_input)
                .desired_width(340.0)
                .hint_text("Comma-separated comparison dimensions"),
        );

        let can_run = !run_state.running && session_key.0.is_some() && !registry.is_empty();
        let run_button = ui.add_enabled(can_run, egui::Button::new("Run Comparison"));
        if run_state.running {
            ui.spinner();
        }
        if run_button.clicked() {
            let dimension_names: Vec<String> = state
                .dimension_input
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            run_writer.write(RequestComparisonRun { dimension_names });
        }
        if session_key.0.is_none() {
            ui.weak("(no API key)");
        }
        ui.separator();

        if ui.button("Export CSV").clicked() {
            export_writer.write(RequestCsvExport);
        }
    });

    if !ui_feedback.last_message.is_empty() {
        let color = if ui_feedback.is_error {
            egui::Color32::from_rgb(220, 80, 80)
        } else {
            ui.visuals().weak_text_color()
        };
        ui.colored_label(color, &ui_feedback.last_message);
    }
}
