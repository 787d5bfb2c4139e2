// src/documents/systems.rs
use bevy::prelude::*;
use std::path::Path;
use walkdir::WalkDir;

use crate::matrix::events::MatrixOperationFeedback;
use crate::settings::AppSettings;

use super::events::RequestAddDocuments;
use super::resources::DocumentRegistry;

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];

fn is_document_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| DOCUMENT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Title from the file stem, reference label from the file name.
fn register_file(registry: &mut DocumentRegistry, path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        warn!("Skipping document with non-UTF8 name: {:?}", path);
        return false;
    };
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .replace('_', " ");
    let before = registry.len();
    registry.add(title, file_name.to_string());
    registry.len() > before
}

/// Opens the file picker and registers every picked file as a document.
pub fn handle_add_documents(
    mut events: EventReader<RequestAddDocuments>,
    mut registry: ResMut<DocumentRegistry>,
    mut feedback_writer: EventWriter<MatrixOperationFeedback>,
) {
    for _ in events.read() {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Documents", DOCUMENT_EXTENSIONS)
            .pick_files()
        else {
            debug!("Document picker cancelled.");
            continue;
        };

        let mut added = 0;
        for path in &paths {
            if register_file(&mut registry, path) {
                added += 1;
            }
        }
        info!("Registered {} new document(s) from picker.", added);
        feedback_writer.write(MatrixOperationFeedback {
            message: format!("Added {} document(s).", added),
            is_error: false,
        });
    }
}

/// Startup scan of the configured documents directory, mirroring the sheet
/// scan at launch: anything on disk that looks like a paper gets
/// registered without user interaction.
pub fn scan_documents_dir_on_startup(
    settings: Res<AppSettings>,
    mut registry: ResMut<DocumentRegistry>,
) {
    let Some(dir) = &settings.documents_dir else {
        info!("No documents directory configured; skipping startup scan.");
        return;
    };
    if !dir.is_dir() {
        warn!("Configured documents directory {:?} does not exist.", dir);
        return;
    }

    let mut found = 0;
    for entry in WalkDir::new(dir)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_document_file(path) && register_file(&mut registry, path) {
            found += 1;
        }
    }
    info!(
        "Startup scan of {:?} registered {} document(s).",
        dir, found
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn document_extensions_are_case_insensitive() {
        assert!(is_document_file(&PathBuf::from("paper.PDF")));
        assert!(is_document_file(&PathBuf::from("notes.md")));
        assert!(!is_document_file(&PathBuf::from("archive.zip")));
        assert!(!is_document_file(&PathBuf::from("no_extension")));
    }

    #[test]
    fn register_file_derives_title_and_reference() {
        let mut registry = DocumentRegistry::default();
        assert!(register_file(
            &mut registry,
            &PathBuf::from("/papers/attention_is_all_you_need.pdf")
        ));
        let doc = &registry.documents()[0];
        assert_eq!(doc.title, "attention is all you need");
        assert_eq!(doc.reference, "attention_is_all_you_need.pdf");
    }
}
