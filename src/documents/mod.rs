// src/documents/mod.rs

pub mod events;
pub mod plugin;
pub mod resources;

pub(crate) mod systems;

pub use events::RequestAddDocuments;
pub use plugin::DocumentsPlugin;
pub use resources::DocumentRegistry;
