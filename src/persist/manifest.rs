//! SHA256SUMS manifest in the `<hex> *<path>` format `sha256sum -c` reads

use crate::error::ShafolderError;
use crate::fingerprint::builder::TreeFingerprint;
use crate::types::Digest;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default manifest file name
pub const DEFAULT_MANIFEST_NAME: &str = "SHA256SUMS";

/// One manifest line, including the trailing newline
///
/// Paths are written with `/` separators regardless of platform. Paths that are
/// not valid UTF-8 are refused.
pub fn manifest_line(digest: &Digest, path: &Path) -> Result<String, ShafolderError> {
    let text = path.to_str().ok_or_else(|| {
        ShafolderError::Config(format!(
            "Path is not valid UTF-8 and cannot be listed in a manifest: {:?}",
            path
        ))
    })?;
    Ok(format!("{} *{}\n", digest.to_hex(), text.replace('\\', "/")))
}

/// Appends lines to a freshly truncated manifest file
pub struct ManifestWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl ManifestWriter {
    pub fn create(path: PathBuf) -> Result<Self, ShafolderError> {
        let file = File::create(&path).map_err(|e| ShafolderError::io(&path, e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    pub fn append(&mut self, digest: &Digest, path: &Path) -> Result<(), ShafolderError> {
        let line = manifest_line(digest, path)?;
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| ShafolderError::io(&self.path, e))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and return the manifest path and number of lines written
    pub fn finish(mut self) -> Result<(PathBuf, usize), ShafolderError> {
        self.writer
            .flush()
            .map_err(|e| ShafolderError::io(&self.path, e))?;
        Ok((self.path, self.lines))
    }
}

/// Write one line per fingerprinted file to `manifest_path`
///
/// The manifest never lists itself.
pub fn write_manifest(
    fingerprint: &TreeFingerprint,
    manifest_path: &Path,
) -> Result<PathBuf, ShafolderError> {
    let mut writer = ManifestWriter::create(manifest_path.to_path_buf())?;
    let own = dunce::canonicalize(manifest_path).ok();

    for file in &fingerprint.files {
        if is_same_path(&file.path, own.as_deref()) {
            warn!(path = %file.path.display(), "Leaving the manifest itself out of the manifest");
            continue;
        }
        writer.append(&file.digest, &file.path)?;
    }
    let (path, lines) = writer.finish()?;
    info!(manifest = %path.display(), lines, "Wrote manifest");
    Ok(path)
}

fn is_same_path(candidate: &Path, own: Option<&Path>) -> bool {
    let Some(own) = own else {
        return false;
    };
    if candidate.file_name() != own.file_name() {
        return false;
    }
    dunce::canonicalize(candidate).map_or(false, |resolved| resolved == own)
}
