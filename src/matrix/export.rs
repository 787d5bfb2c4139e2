// src/matrix/export.rs
// CSV serialization of the document-major table. The escaping and
// normalization here are a bit-exact compatibility contract; change
// nothing without updating the consumers of the exported files.

use super::definitions::{Document, Matrix};

/// Fixed download name for the exported table.
pub const EXPORT_FILE_NAME: &str = "literature_comparison.csv";

pub const TITLE_HEADER: &str = "Paper Title";
pub const REFERENCE_HEADER: &str = "Authors/Year (Ref)";

/// Wraps a field in double quotes, doubling any internal double quote.
/// Every field is escaped, not just those containing separators.
pub fn escape_csv_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Normalizes insight text for export: every literal `**` is removed and
/// every `-` becomes `•`. The hyphen substitution is intentionally global
/// (it also rewrites in-word hyphens such as "follow-up"), matching the
/// established export format.
pub fn normalize_insight_for_csv(text: &str) -> String {
    text.replace("**", "").replace('-', "•")
}

/// Serializes the matrix against an already-derived, ordered document row
/// list. Pure: never touches the matrix. Returns `None` when `rows` is
/// empty — export is a no-op without visible documents.
pub fn matrix_to_csv(matrix: &Matrix, rows: &[&Document]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut header: Vec<String> = vec![
        escape_csv_field(TITLE_HEADER),
        escape_csv_field(REFERENCE_HEADER),
    ];
    header.extend(
        matrix
            .dimensions()
            .iter()
            .map(|d| escape_csv_field(&d.name)),
    );

    let mut lines = vec![header.join(",")];
    for document in rows {
        let mut fields: Vec<String> = vec![
            escape_csv_field(&document.title),
            escape_csv_field(&document.reference),
        ];
        for dimension in matrix.dimensions() {
            let insight = dimension.insight(&document.id).unwrap_or_default();
            fields.push(escape_csv_field(&normalize_insight_for_csv(insight)));
        }
        lines.push(fields.join(","));
    }

    Some(lines.join("\n"))
}
