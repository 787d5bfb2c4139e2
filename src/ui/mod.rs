// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use elements::editor::state::EditorWindowState;
use elements::main_view::comparison_view_ui;
use systems::{handle_matrix_data_modified, handle_ui_feedback};

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the comparison table UI.
pub struct ComparisonUiPlugin;

impl Plugin for ComparisonUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .add_systems(Update, (handle_ui_feedback, handle_matrix_data_modified))
            .add_systems(EguiContextPass, comparison_view_ui);

        info!("ComparisonUiPlugin initialized.");
    }
}
