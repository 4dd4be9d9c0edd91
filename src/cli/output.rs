//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ShafolderError;

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &ShafolderError) -> String {
    match e {
        ShafolderError::EmptyInput(path) => format!(
            "Error: no files to fingerprint in {} (hidden files and folders are skipped)",
            path.display()
        ),
        other => format!("Error: {}", other),
    }
}
