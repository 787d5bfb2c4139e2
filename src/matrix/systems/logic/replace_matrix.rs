// src/matrix/systems/logic/replace_matrix.rs
use bevy::prelude::*;

use crate::matrix::definitions::Matrix;
use crate::matrix::events::{MatrixDataModifiedEvent, ReplaceMatrixEvent};
use crate::matrix::resources::MatrixStore;

/// Installs each incoming matrix wholesale. Replacement always succeeds
/// and is last-write-wins: a result arriving after the user already edited
/// the prior matrix still replaces it, discarding unexported edits.
pub fn handle_replace_matrix(
    mut events: EventReader<ReplaceMatrixEvent>,
    mut store: ResMut<MatrixStore>,
    mut data_modified_writer: EventWriter<MatrixDataModifiedEvent>,
) {
    for event in events.read() {
        let matrix = Matrix::new(event.dimensions.clone());
        info!(
            "Installing comparison matrix with {} dimension(s).",
            matrix.dimensions().len()
        );
        store.replace(matrix);
        data_modified_writer.write(MatrixDataModifiedEvent);
    }
}
