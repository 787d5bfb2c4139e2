// src/documents/resources.rs
use bevy::prelude::*;

use crate::matrix::definitions::{Document, DocumentId};

/// Ordered registry of the documents known to this session. Registration
/// order is the baseline row order of the comparison table; the matrix
/// engine only ever reads documents, it never creates or removes them.
#[derive(Resource, Default, Debug)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
}

impl DocumentRegistry {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Registers a document, keyed by reference label to avoid duplicate
    /// entries when the same file is picked twice. Returns the id of the
    /// new or already-registered document.
    pub fn add(&mut self, title: String, reference: String) -> DocumentId {
        if let Some(existing) = self.documents.iter().find(|d| d.reference == reference) {
            debug!("Document '{}' already registered; skipping.", reference);
            return existing.id;
        }
        let document = Document {
            id: DocumentId::new(),
            title,
            reference,
        };
        let id = document.id;
        self.documents.push(document);
        id
    }
}
