// src/settings/mod.rs
pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Resource, Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppSettings {
    /// Directory scanned for papers at startup. `None` disables the scan.
    pub documents_dir: Option<PathBuf>,
}

impl AppSettings {
    /// Loads persisted settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        io::load_settings_from_file().unwrap_or_default()
    }
}
