// src/matrix/systems/io/export_csv.rs
use bevy::prelude::*;
use std::fs;

use crate::documents::resources::DocumentRegistry;
use crate::matrix::events::{MatrixOperationFeedback, RequestCsvExport};
use crate::matrix::export::{matrix_to_csv, EXPORT_FILE_NAME};
use crate::matrix::resources::{MatrixStore, SortHeuristic};
use crate::matrix::transpose::derive_rows;

/// Serializes the currently rendered table (same derivation the table view
/// uses) and writes it through a save dialog pre-filled with the fixed
/// export file name. Export never mutates the matrix.
pub fn handle_csv_export(
    mut events: EventReader<RequestCsvExport>,
    store: Res<MatrixStore>,
    registry: Res<DocumentRegistry>,
    heuristic: Res<SortHeuristic>,
    mut feedback_writer: EventWriter<MatrixOperationFeedback>,
) {
    for _ in events.read() {
        let Some(matrix) = store.matrix() else {
            feedback_writer.write(MatrixOperationFeedback {
                message: "No comparison matrix to export.".to_string(),
                is_error: false,
            });
            continue;
        };

        let rows = derive_rows(&store, registry.documents(), &heuristic);
        let Some(csv) = matrix_to_csv(matrix, &rows) else {
            info!("CSV export skipped: no visible documents.");
            feedback_writer.write(MatrixOperationFeedback {
                message: "Nothing to export: no documents in the current matrix.".to_string(),
                is_error: false,
            });
            continue;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            debug!("CSV export cancelled by user.");
            continue;
        };

        match fs::write(&path, &csv) {
            Ok(()) => {
                info!("Exported comparison matrix to {:?}.", path);
                feedback_writer.write(MatrixOperationFeedback {
                    message: format!("Exported {} row(s) to {}.", rows.len(), path.display()),
                    is_error: false,
                });
            }
            Err(e) => {
                error!("Failed writing CSV export to {:?}: {}", path, e);
                feedback_writer.write(MatrixOperationFeedback {
                    message: format!("CSV export failed: {}", e),
                    is_error: true,
                });
            }
        }
    }
}
