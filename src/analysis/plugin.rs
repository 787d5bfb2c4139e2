// src/analysis/plugin.rs
use bevy::prelude::*;

use super::events::{ComparisonRunResult, RequestComparisonRun};
use super::resources::{ComparisonRunState, SessionApiKey};
use super::systems;
use crate::matrix::plugin::MatrixSystemSet;

/// Plugin wrapping the external comparison-run collaborator: API key
/// resolution, the background provider call, and result installation.
pub struct AnalysisPlugin;

impl Plugin for AnalysisPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionApiKey>()
            .init_resource::<ComparisonRunState>();

        app.add_event::<RequestComparisonRun>()
            .add_event::<ComparisonRunResult>();

        app.add_systems(Startup, systems::load_api_key_startup);
        app.add_systems(
            Update,
            (
                systems::handle_comparison_request,
                systems::handle_comparison_results,
            )
                .chain()
                .before(MatrixSystemSet::ApplyChanges),
        );

        info!("AnalysisPlugin initialized.");
    }
}
