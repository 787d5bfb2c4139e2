// src/matrix/definitions.rs
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Opaque identifier for a source document (paper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        DocumentId(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A source document under comparison. Created by the documents module;
/// the matrix engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Human-readable title shown in the first table column.
    pub title: String,
    /// Reference label (typically the file name, or "Authors/Year").
    pub reference: String,
}

/// One named comparison criterion and its per-document insight text.
///
/// This is also the wire shape accepted from the comparison run:
/// `{ "name": ..., "insights": { document-id: text } }`. The engine assumes
/// well-formedness and does not validate incoming dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    #[serde(default)]
    pub insights: HashMap<DocumentId, String>,
}

impl Dimension {
    pub fn insight(&self, document_id: &DocumentId) -> Option<&str> {
        self.insights.get(document_id).map(String::as_str)
    }
}

/// Dimension-major comparison data for one comparison run.
///
/// Dimension order is authoritative and never reordered by the engine.
/// Which documents appear in the rendered table is decided by the
/// membership-source dimension recorded at construction time (the first
/// dimension of the run), so reordering dimensions later cannot silently
/// change table membership.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    dimensions: Vec<Dimension>,
    membership_source: Option<String>,
}

impl Matrix {
    /// Builds a matrix from the wire-shape dimension list, recording the
    /// first dimension's name as the membership source.
    pub fn new(dimensions: Vec<Dimension>) -> Self {
        let membership_source = dimensions.first().map(|d| d.name.clone());
        Matrix {
            dimensions,
            membership_source,
        }
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// First dimension whose name matches exactly, in dimension order.
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// The dimension whose insight keys define table membership.
    /// Resolved by the recorded name; falls back to the first dimension if
    /// the name no longer resolves.
    pub fn membership_dimension(&self) -> Option<&Dimension> {
        self.membership_source
            .as_deref()
            .and_then(|name| self.dimension(name))
            .or_else(|| self.dimensions.first())
    }

    /// Document ids present in the membership-source dimension. Documents
    /// recorded only under later dimensions are not members; this is a
    /// deliberate contract, not an oversight.
    pub fn active_document_ids(&self) -> HashSet<DocumentId> {
        self.membership_dimension()
            .map(|d| d.insights.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn insight(&self, dimension_name: &str, document_id: &DocumentId) -> Option<&str> {
        self.dimension(dimension_name)
            .and_then(|d| d.insight(document_id))
    }

    /// Copy-on-write single-cell update. Returns a new matrix with exactly
    /// one (dimension, document) insight replaced, or `None` when no
    /// dimension matches `dimension_name` (the caller treats that as a
    /// silent no-op). `self` is never mutated.
    pub fn with_insight(
        &self,
        document_id: DocumentId,
        dimension_name: &str,
        text: String,
    ) -> Option<Matrix> {
        let idx = self
            .dimensions
            .iter()
            .position(|d| d.name == dimension_name)?;
        let mut dimensions = self.dimensions.clone();
        dimensions[idx].insights.insert(document_id, text);
        Some(Matrix {
            dimensions,
            membership_source: self.membership_source.clone(),
        })
    }
}
