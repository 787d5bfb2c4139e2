// tests/matrix_mutation_funnel.rs
// Fails if runtime code outside the matrix logic systems mutates the store
// directly. All matrix mutation must funnel through the update/replace
// event handlers; the UI, documents, and analysis modules stay read-only.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    // The store impl, the mutation systems, the headless export path, and
    // unit-test heavy engine files.
    p.contains("matrix/resources.rs") || p.contains("matrix\\resources.rs") ||
    p.contains("matrix/systems/logic") || p.contains("matrix\\systems\\logic") ||
    p.contains("matrix/transpose.rs") || p.contains("matrix\\transpose.rs") ||
    p.contains("matrix/plugin.rs") || p.contains("matrix\\plugin.rs") ||
    p.contains("cli/export.rs") || p.contains("cli\\export.rs")
}

const FORBIDDEN_CALLS: &[&str] = &["store.update_insight(", "store.replace("];

#[test]
fn matrix_mutation_only_happens_in_logic_systems() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    collect_rs_files(&src, &mut files);
    assert!(!files.is_empty(), "no source files found under {:?}", src);

    let mut violations = Vec::new();
    for file in files {
        if is_whitelisted(&file) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&file) else {
            continue;
        };
        for (line_no, line) in contents.lines().enumerate() {
            for pattern in FORBIDDEN_CALLS {
                if line.contains(pattern) {
                    violations.push(format!("{}:{}: {}", file.display(), line_no + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "direct matrix mutation outside the logic systems:\n{}",
        violations.join("\n")
    );
}
