// src/analysis/resources.rs
use bevy::prelude::*;

/// API key for the comparison provider, resolved once at startup from the
/// OS keyring with an environment fallback. `None` disables the run button.
#[derive(Resource, Default, Debug)]
pub struct SessionApiKey(pub Option<String>);

/// Tracks the single allowed in-flight comparison run. There is no
/// cancellation: a result arriving after the flag was cleared would simply
/// install last-write-wins.
#[derive(Resource, Default, Debug)]
pub struct ComparisonRunState {
    pub running: bool,
}
