// src/ui/elements/main_view.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::analysis::events::RequestComparisonRun;
use crate::analysis::resources::{ComparisonRunState, SessionApiKey};
use crate::documents::events::RequestAddDocuments;
use crate::documents::resources::DocumentRegistry;
use crate::matrix::events::{RequestCsvExport, UpdateInsightRequest};
use crate::matrix::resources::{MatrixStore, SortHeuristic};
use crate::settings::AppSettings;
use crate::ui::UiFeedbackState;

use super::editor::state::EditorWindowState;
use super::matrix_table::show_matrix_table;
use super::top_panel::show_top_panel;

/// Top-level UI: control bar plus the comparison table.
#[allow(clippy::too_many_arguments)]
pub fn comparison_view_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    mut settings: ResMut<AppSettings>,
    store: Res<MatrixStore>,
    registry: Res<DocumentRegistry>,
    heuristic: Res<SortHeuristic>,
    run_state: Res<ComparisonRunState>,
    session_key: Res<SessionApiKey>,
    ui_feedback: Res<UiFeedbackState>,
    mut add_documents_writer: EventWriter<RequestAddDocuments>,
    mut run_writer: EventWriter<RequestComparisonRun>,
    mut export_writer: EventWriter<RequestCsvExport>,
    mut update_writer: EventWriter<UpdateInsightRequest>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("control_bar").show(ctx, |ui| {
        show_top_panel(
            ui,
            &mut state,
            &mut settings,
            &run_state,
            &session_key,
            &registry,
            &ui_feedback,
            &mut add_documents_writer,
            &mut run_writer,
            &mut export_writer,
        );
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            show_matrix_table(
                ui,
                &store,
                &registry,
                &heuristic,
                &mut state,
                &mut update_writer,
            );
        });
    });
}
