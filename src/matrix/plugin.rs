// src/matrix/plugin.rs
use bevy::prelude::*;

use super::events::{
    MatrixDataModifiedEvent, MatrixOperationFeedback, ReplaceMatrixEvent, RequestCsvExport,
    UpdateInsightRequest,
};
use super::resources::{MatrixStore, SortHeuristic};
use super::systems;

/// Ordering between the mutation systems and the file io they feed.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatrixSystemSet {
    ApplyChanges,
    FileOperations,
}

/// Plugin owning the comparison matrix engine: store, mutation events,
/// and CSV export.
pub struct MatrixPlugin;

impl Plugin for MatrixPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                MatrixSystemSet::ApplyChanges,
                MatrixSystemSet::FileOperations.after(MatrixSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<MatrixStore>()
            .init_resource::<SortHeuristic>();

        app.add_event::<ReplaceMatrixEvent>()
            .add_event::<UpdateInsightRequest>()
            .add_event::<RequestCsvExport>()
            .add_event::<MatrixOperationFeedback>()
            .add_event::<MatrixDataModifiedEvent>();

        app.add_systems(
            Update,
            (
                systems::logic::handle_replace_matrix,
                systems::logic::handle_update_insight,
            )
                .chain()
                .in_set(MatrixSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            systems::io::handle_csv_export.in_set(MatrixSystemSet::FileOperations),
        );

        info!("MatrixPlugin initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::definitions::{Dimension, DocumentId};
    use std::collections::HashMap;

    // Headless app with just the mutation event path; no io, no ui.
    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<ReplaceMatrixEvent>()
            .add_event::<UpdateInsightRequest>()
            .add_event::<MatrixDataModifiedEvent>();
        app.init_resource::<MatrixStore>();
        app.add_systems(
            Update,
            (
                systems::logic::handle_replace_matrix,
                systems::logic::handle_update_insight,
            )
                .chain(),
        );
        app
    }

    fn one_dimension(doc: DocumentId, text: &str) -> Vec<Dimension> {
        let mut insights = HashMap::new();
        insights.insert(doc, text.to_string());
        vec![Dimension {
            name: "Study Design".to_string(),
            insights,
        }]
    }

    #[test]
    fn replace_then_edit_flows_through_events() {
        let doc = DocumentId::new();
        let mut app = test_app();

        app.world_mut().send_event(ReplaceMatrixEvent {
            dimensions: one_dimension(doc, "old"),
        });
        app.update();
        app.world_mut().send_event(UpdateInsightRequest {
            document_id: doc,
            dimension_name: "Study Design".to_string(),
            new_text: "new".to_string(),
        });
        app.update();

        let store = app.world().resource::<MatrixStore>();
        assert_eq!(
            store.matrix().and_then(|m| m.insight("Study Design", &doc)),
            Some("new")
        );
        assert_eq!(store.generation(), 2);
    }

    #[test]
    fn late_replacement_discards_prior_edits() {
        let doc = DocumentId::new();
        let mut app = test_app();

        app.world_mut().send_event(ReplaceMatrixEvent {
            dimensions: one_dimension(doc, "old"),
        });
        app.update();
        app.world_mut().send_event(UpdateInsightRequest {
            document_id: doc,
            dimension_name: "Study Design".to_string(),
            new_text: "edited".to_string(),
        });
        app.update();
        // A comparison result landing after the edit installs wholesale.
        app.world_mut().send_event(ReplaceMatrixEvent {
            dimensions: one_dimension(doc, "old"),
        });
        app.update();

        let store = app.world().resource::<MatrixStore>();
        assert_eq!(
            store.matrix().and_then(|m| m.insight("Study Design", &doc)),
            Some("old")
        );
    }

    #[test]
    fn unknown_dimension_request_leaves_store_untouched() {
        let doc = DocumentId::new();
        let mut app = test_app();

        app.world_mut().send_event(ReplaceMatrixEvent {
            dimensions: one_dimension(doc, "old"),
        });
        app.update();
        app.world_mut().send_event(UpdateInsightRequest {
            document_id: doc,
            dimension_name: "Nonexistent".to_string(),
            new_text: "x".to_string(),
        });
        app.update();

        let store = app.world().resource::<MatrixStore>();
        assert_eq!(store.generation(), 1);
        assert_eq!(
            store.matrix().and_then(|m| m.insight("Study Design", &doc)),
            Some("old")
        );
    }
}
