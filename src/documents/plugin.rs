// src/documents/plugin.rs
use bevy::prelude::*;

use super::events::RequestAddDocuments;
use super::resources::DocumentRegistry;
use super::systems;
use crate::matrix::plugin::MatrixSystemSet;

/// Plugin owning the document registry and its intake paths (file picker
/// plus the startup directory scan).
pub struct DocumentsPlugin;

impl Plugin for DocumentsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DocumentRegistry>();

        app.add_event::<RequestAddDocuments>();

        app.add_systems(Startup, systems::scan_documents_dir_on_startup);
        app.add_systems(
            Update,
            systems::handle_add_documents.before(MatrixSystemSet::ApplyChanges),
        );

        info!("DocumentsPlugin initialized.");
    }
}
