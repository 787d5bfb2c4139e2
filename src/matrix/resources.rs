// src/matrix/resources.rs
use bevy::prelude::*;
use std::collections::HashSet;

use super::definitions::{DocumentId, Matrix};

/// Owns the current comparison matrix. All mutation funnels through
/// `replace` and `update_insight`; both install a whole new `Matrix` value
/// (copy-on-write) and bump `generation` so callers can detect changes
/// without deep comparison.
#[derive(Resource, Default, Debug)]
pub struct MatrixStore {
    current: Option<Matrix>,
    generation: u64,
}

impl MatrixStore {
    pub fn matrix(&self) -> Option<&Matrix> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Unconditionally installs a new matrix as current. Always succeeds;
    /// the previous matrix (and any unexported cell edits to it) is
    /// discarded wholesale.
    pub fn replace(&mut self, matrix: Matrix) {
        trace!(
            "Replacing matrix: {} dimensions installed.",
            matrix.dimensions().len()
        );
        self.current = Some(matrix);
        self.generation += 1;
    }

    /// Document ids in the membership-source dimension of the current
    /// matrix; empty when no matrix or no dimensions exist.
    pub fn active_document_ids(&self) -> HashSet<DocumentId> {
        self.current
            .as_ref()
            .map(Matrix::active_document_ids)
            .unwrap_or_default()
    }

    /// Replaces one (dimension, document) insight. Looks the dimension up
    /// by exact name in dimension order; when no matrix is present or no
    /// dimension matches, this is a defined no-op, not an error. Returns
    /// whether an update was applied.
    pub fn update_insight(
        &mut self,
        document_id: DocumentId,
        dimension_name: &str,
        text: String,
    ) -> bool {
        let Some(current) = &self.current else {
            trace!(
                "Insight update for dimension '{}' ignored: no matrix present.",
                dimension_name
            );
            return false;
        };
        match current.with_insight(document_id, dimension_name, text) {
            Some(updated) => {
                self.current = Some(updated);
                self.generation += 1;
                true
            }
            None => {
                trace!(
                    "Insight update ignored: no dimension named '{}'.",
                    dimension_name
                );
                false
            }
        }
    }
}

/// Keyword predicate used to pick the grouping dimension for the table
/// sort. The dimension names come from the comparison provider, so the
/// keywords are configuration rather than a hardcoded pair.
#[derive(Resource, Debug, Clone)]
pub struct SortHeuristic {
    pub keywords: Vec<String>,
}

impl Default for SortHeuristic {
    fn default() -> Self {
        SortHeuristic {
            keywords: vec!["model".to_string(), "architecture".to_string()],
        }
    }
}

impl SortHeuristic {
    /// Case-insensitive substring match against any configured keyword.
    pub fn matches(&self, dimension_name: &str) -> bool {
        let lowered = dimension_name.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| lowered.contains(&kw.to_lowercase()))
    }
}
