// src/analysis/mod.rs

pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;

pub(crate) mod systems;

pub use events::RequestComparisonRun;
pub use plugin::AnalysisPlugin;
pub use resources::{ComparisonRunState, SessionApiKey};
