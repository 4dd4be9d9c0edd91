//! Clearing write permissions on materialized copies

use crate::error::ShafolderError;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Make a single file or directory read-only
pub fn make_readonly(path: &Path) -> Result<(), ShafolderError> {
    let mut permissions = std::fs::metadata(path)
        .map_err(|e| ShafolderError::io(path, e))?
        .permissions();
    permissions.set_readonly(true);
    std::fs::set_permissions(path, permissions).map_err(|e| ShafolderError::io(path, e))?;
    trace!(path = %path.display(), "Marked read-only");
    Ok(())
}

/// Make everything under `root`, and `root` itself, read-only
///
/// Contents are visited before their directory so the walk never needs to
/// write into a directory it already locked.
pub fn make_tree_readonly(root: &Path) -> Result<(), ShafolderError> {
    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry?;
        make_readonly(entry.path())?;
    }
    Ok(())
}
