// src/cli/export.rs
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::matrix::definitions::{Dimension, Document, Matrix};
use crate::matrix::export::matrix_to_csv;
use crate::matrix::resources::{MatrixStore, SortHeuristic};
use crate::matrix::transpose::derive_rows;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Headless export: reads the wire-shape matrix and document list from
/// disk and writes the same CSV the GUI export produces. Returns the
/// number of exported rows; zero rows means no file was written (export
/// is a no-op on an empty table).
pub fn run_export(
    matrix_path: &Path,
    documents_path: &Path,
    out_path: &Path,
) -> Result<usize, ExportError> {
    let dimensions: Vec<Dimension> = serde_json::from_str(&fs::read_to_string(matrix_path)?)?;
    let documents: Vec<Document> = serde_json::from_str(&fs::read_to_string(documents_path)?)?;

    let mut store = MatrixStore::default();
    store.replace(Matrix::new(dimensions));
    let heuristic = SortHeuristic::default();

    let rows = derive_rows(&store, &documents, &heuristic);
    let csv = store.matrix().and_then(|matrix| matrix_to_csv(matrix, &rows));
    match csv {
        Some(csv) => {
            fs::write(out_path, csv)?;
            Ok(rows.len())
        }
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::definitions::DocumentId;
    use std::collections::HashMap;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("insightgrid_test_{}", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn headless_export_round_trip() {
        let id = DocumentId::new();
        let documents = vec![Document {
            id,
            title: "A Paper".to_string(),
            reference: "a.pdf".to_string(),
        }];
        let mut insights = HashMap::new();
        insights.insert(id, "finding - key".to_string());
        let dimensions = vec![Dimension {
            name: "Key Findings".to_string(),
            insights,
        }];

        let matrix_path = write_temp(
            "matrix.json",
            &serde_json::to_string(&dimensions).unwrap(),
        );
        let documents_path = write_temp(
            "documents.json",
            &serde_json::to_string(&documents).unwrap(),
        );
        let out_path = std::env::temp_dir().join("insightgrid_test_out.csv");

        let rows = run_export(&matrix_path, &documents_path, &out_path).unwrap();
        assert_eq!(rows, 1);
        let csv = fs::read_to_string(&out_path).unwrap();
        assert_eq!(
            csv,
            "\"Paper Title\",\"Authors/Year (Ref)\",\"Key Findings\"\n\
             \"A Paper\",\"a.pdf\",\"finding • key\""
        );
    }

    #[test]
    fn empty_document_list_writes_nothing() {
        let matrix_path = write_temp(
            "empty_matrix.json",
            r#"[{"name":"Key Findings","insights":{}}]"#,
        );
        let documents_path = write_temp("empty_documents.json", "[]");
        let out_path = std::env::temp_dir().join("insightgrid_test_never_written.csv");
        let _ = fs::remove_file(&out_path);

        let rows = run_export(&matrix_path, &documents_path, &out_path).unwrap();
        assert_eq!(rows, 0);
        assert!(!out_path.exists());
    }
}
