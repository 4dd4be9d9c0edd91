//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Write a file, creating parent directories as needed
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Restore write permission under `root` so the temp dir can be removed
pub fn make_writable(root: &Path) {
    if !root.exists() {
        return;
    }
    for entry in WalkDir::new(root) {
        let entry = entry.unwrap();
        let mut permissions = fs::metadata(entry.path()).unwrap().permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        fs::set_permissions(entry.path(), permissions).unwrap();
    }
}

/// Names of the direct children of `dir`, sorted
pub fn child_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
