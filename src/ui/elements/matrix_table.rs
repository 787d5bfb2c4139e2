// src/ui/elements/matrix_table.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::documents::resources::DocumentRegistry;
use crate::matrix::definitions::DocumentId;
use crate::matrix::events::UpdateInsightRequest;
use crate::matrix::export::{REFERENCE_HEADER, TITLE_HEADER};
use crate::matrix::resources::{MatrixStore, SortHeuristic};
use crate::matrix::transpose::derive_rows;

use super::editor::state::EditorWindowState;
use super::editor::widget::insight_cell_widget;

/// Document-major comparison table: one row per visible document in
/// transposed + sorted order, title and reference first, then one column
/// per dimension in matrix order.
pub fn show_matrix_table(
    ui: &mut egui::Ui,
    store: &MatrixStore,
    registry: &DocumentRegistry,
    heuristic: &SortHeuristic,
    state: &mut EditorWindowState,
    update_writer: &mut EventWriter<UpdateInsightRequest>,
) {
    let Some(matrix) = store.matrix() else {
        ui.weak("Run a comparison to populate the table.");
        return;
    };

    let rows: Vec<(DocumentId, String, String)> =
        derive_rows(store, registry.documents(), heuristic)
            .into_iter()
            .map(|d| (d.id, d.title.clone(), d.reference.clone()))
            .collect();
    if rows.is_empty() {
        ui.weak("The current matrix contains no registered documents.");
        return;
    }
    let dimension_names: Vec<String> =
        matrix.dimensions().iter().map(|d| d.name.clone()).collect();

    let body_height = egui::TextStyle::Body.resolve(ui.style()).size;
    let row_height = body_height * 4.0;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::top_down(egui::Align::LEFT))
        .column(Column::auto().at_least(150.0))
        .column(Column::auto().at_least(110.0));
    for _ in &dimension_names {
        table = table.column(Column::remainder().at_least(160.0).clip(true));
    }

    table
        .header(body_height * 1.8, |mut header| {
            header.col(|ui| {
                ui.strong(TITLE_HEADER);
            });
            header.col(|ui| {
                ui.strong(REFERENCE_HEADER);
            });
            for name in &dimension_names {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for (document_id, title, reference) in &rows {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(title);
                    });
                    row.col(|ui| {
                        ui.label(reference);
                    });
                    for name in &dimension_names {
                        let current = matrix.insight(name, document_id).unwrap_or_default();
                        row.col(|ui| {
                            let id = egui::Id::new(("insight_cell", *document_id, name.as_str()));
                            insight_cell_widget(
                                ui,
                                id,
                                *document_id,
                                name,
                                current,
                                state,
                                update_writer,
                            );
                        });
                    }
                });
            }
        });
}
