// src/documents/events.rs
use bevy::prelude::Event;

/// Sent by the UI when the user asks to add papers via the file picker.
#[derive(Event, Debug, Clone)]
pub struct RequestAddDocuments;
