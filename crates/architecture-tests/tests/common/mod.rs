//! Shared helpers for source-scanning architecture tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// All `.rs` files under `crates/`, skipping build output and this crate.
pub fn rust_files() -> Vec<PathBuf> {
    let crates_dir = workspace_root().join("crates");
    assert!(crates_dir.exists(), "crates/ directory not found at {crates_dir:?}");

    walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Path relative to the workspace root, for readable failure messages.
pub fn display_path(path: &Path) -> String {
    let root = workspace_root();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Whether a file only contains test code (integration tests, test modules, benches).
pub fn is_test_source(path: &Path) -> bool {
    path.components().any(|c| {
        let c = c.as_os_str();
        c == "tests" || c == "benches"
    }) || path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with("_tests.rs") || name == "tests.rs")
}
