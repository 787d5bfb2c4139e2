// src/matrix/transpose.rs
// Derives the document-major table rows from the dimension-major matrix:
// membership filtering first, then the heuristic grouping sort.

use super::definitions::{Dimension, Document, Matrix};
use super::resources::{MatrixStore, SortHeuristic};

/// Subsequence of `documents` (original relative order preserved) whose id
/// appears in the store's active document set. A document with insights
/// recorded only under a non-membership dimension is excluded entirely;
/// membership is governed solely by the membership-source dimension.
pub fn visible_documents<'a>(store: &MatrixStore, documents: &'a [Document]) -> Vec<&'a Document> {
    let active = store.active_document_ids();
    if active.is_empty() {
        return Vec::new();
    }
    documents.iter().filter(|d| active.contains(&d.id)).collect()
}

/// First dimension, in matrix order, whose name the heuristic accepts.
pub fn find_sort_dimension<'a>(
    matrix: &'a Matrix,
    heuristic: &SortHeuristic,
) -> Option<&'a Dimension> {
    matrix.dimensions().iter().find(|d| heuristic.matches(&d.name))
}

/// Stable-sorts rows by the grouping dimension's insight text, compared
/// case-insensitively; a document without an entry sorts as the empty
/// string. When no dimension matches the heuristic, the baseline order is
/// returned unchanged.
pub fn sort_documents<'a>(
    mut rows: Vec<&'a Document>,
    matrix: &Matrix,
    heuristic: &SortHeuristic,
) -> Vec<&'a Document> {
    if let Some(dimension) = find_sort_dimension(matrix, heuristic) {
        rows.sort_by_key(|doc| {
            dimension
                .insight(&doc.id)
                .unwrap_or_default()
                .to_lowercase()
        });
    }
    rows
}

/// Full row derivation: membership filter, then grouping sort.
pub fn derive_rows<'a>(
    store: &MatrixStore,
    documents: &'a [Document],
    heuristic: &SortHeuristic,
) -> Vec<&'a Document> {
    let rows = visible_documents(store, documents);
    match store.matrix() {
        Some(matrix) => sort_documents(rows, matrix, heuristic),
        None => rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::definitions::{Dimension, DocumentId};

    fn doc(title: &str) -> Document {
        Document {
            id: DocumentId::new(),
            title: title.to_string(),
            reference: format!("{}.pdf", title),
        }
    }

    fn dim(name: &str, entries: &[(DocumentId, &str)]) -> Dimension {
        Dimension {
            name: name.to_string(),
            insights: entries
                .iter()
                .map(|(id, text)| (*id, text.to_string()))
                .collect(),
        }
    }

    fn store_with(dimensions: Vec<Dimension>) -> MatrixStore {
        let mut store = MatrixStore::default();
        store.replace(Matrix::new(dimensions));
        store
    }

    #[test]
    fn membership_excludes_documents_known_only_to_later_dimensions() {
        let a = doc("a");
        let b = doc("b");
        let documents = vec![a.clone(), b.clone()];
        let store = store_with(vec![
            dim("Study Design", &[(a.id, "RCT")]),
            dim("Key Findings", &[(a.id, "x"), (b.id, "y")]),
        ]);
        let rows = visible_documents(&store, &documents);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, a.id);
    }

    #[test]
    fn baseline_order_is_document_registration_order() {
        let a = doc("zebra");
        let b = doc("apple");
        let documents = vec![a.clone(), b.clone()];
        let store = store_with(vec![dim("Key Findings", &[(a.id, "x"), (b.id, "y")])]);
        let rows = visible_documents(&store, &documents);
        assert_eq!(rows[0].id, a.id);
        assert_eq!(rows[1].id, b.id);
    }

    #[test]
    fn sorter_selects_first_heuristic_dimension() {
        let matrix = Matrix::new(vec![
            dim("Study Design", &[]),
            dim("Model/Architecture/Tools Used", &[]),
            dim("Key Findings", &[]),
        ]);
        let heuristic = SortHeuristic::default();
        let selected = find_sort_dimension(&matrix, &heuristic).expect("should match");
        assert_eq!(selected.name, "Model/Architecture/Tools Used");
    }

    #[test]
    fn sort_is_case_insensitive_with_missing_insights_as_empty() {
        let a = doc("a");
        let b = doc("b");
        let c = doc("c");
        let documents = vec![a.clone(), b.clone(), c.clone()];
        let store = store_with(vec![
            dim(
                "Model Used",
                &[(a.id, "Transformer"), (b.id, "cnn"), (c.id, "CNN variant")],
            ),
        ]);
        // All three are members via the first dimension.
        let rows = derive_rows(&store, &documents, &SortHeuristic::default());
        let titles: Vec<&str> = rows.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c", "a"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let a = doc("first");
        let b = doc("second");
        let documents = vec![a.clone(), b.clone()];
        let store = store_with(vec![dim(
            "Architecture",
            &[(a.id, "CNN"), (b.id, "cnn")],
        )]);
        let rows = derive_rows(&store, &documents, &SortHeuristic::default());
        // Equal case-folded keys: registration order preserved.
        assert_eq!(rows[0].id, a.id);
        assert_eq!(rows[1].id, b.id);
    }

    #[test]
    fn no_heuristic_match_keeps_baseline_order() {
        let a = doc("zeta");
        let b = doc("alpha");
        let documents = vec![a.clone(), b.clone()];
        let store = store_with(vec![dim(
            "Key Findings",
            &[(a.id, "zzz"), (b.id, "aaa")],
        )]);
        let rows = derive_rows(&store, &documents, &SortHeuristic::default());
        assert_eq!(rows[0].id, a.id);
        assert_eq!(rows[1].id, b.id);
    }
}
