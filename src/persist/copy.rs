//! Fingerprint-named, read-only copies
//!
//! A single file lands at `<out>/<tag> <name>`. A directory is reproduced at
//! `<out>/<tree tag> <dir name>/...` with every file renamed `<file tag> <name>`,
//! where the folder tag comes from the aggregate digest of the whole tree.
//! Existing destinations are never overwritten: the tag gets a `-2`, `-3`, ...
//! suffix instead.

use crate::error::ShafolderError;
use crate::fingerprint::builder::{TargetKind, TreeFingerprint};
use crate::fingerprint::format::Formatter;
use crate::persist::readonly::{make_readonly, make_tree_readonly};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Build `"<tag> <name>"`, or `"<tag>-<n> <name>"` when `suffix` is given
///
/// Names that are not valid UTF-8 are refused rather than rewritten.
pub fn tagged_name(
    tag: &str,
    suffix: Option<usize>,
    name: &OsStr,
) -> Result<String, ShafolderError> {
    let name = name.to_str().ok_or_else(|| {
        ShafolderError::Config(format!("File name is not valid UTF-8: {:?}", name))
    })?;
    Ok(match suffix {
        Some(n) => format!("{}-{} {}", tag, n, name),
        None => format!("{} {}", tag, name),
    })
}

/// First destination under `dir` for `name` tagged with `tag` that does not exist yet
pub fn unique_destination(
    dir: &Path,
    tag: &str,
    name: &OsStr,
) -> Result<PathBuf, ShafolderError> {
    let preferred = dir.join(tagged_name(tag, None, name)?);
    if !preferred.exists() {
        return Ok(preferred);
    }

    let mut n = 2;
    loop {
        let candidate = dir.join(tagged_name(tag, Some(n), name)?);
        if !candidate.exists() {
            warn!(
                existing = %preferred.display(),
                chosen = %candidate.display(),
                "Tag collision, using suffixed name"
            );
            return Ok(candidate);
        }
        n += 1;
    }
}

/// Writes renamed read-only copies into an output folder
pub struct CopyWriter<'a> {
    out_dir: PathBuf,
    formatter: &'a Formatter,
}

impl<'a> CopyWriter<'a> {
    pub fn new(out_dir: PathBuf, formatter: &'a Formatter) -> Self {
        Self { out_dir, formatter }
    }

    /// Copy the fingerprinted content; returns the top-level path created
    pub fn write(&self, fingerprint: &TreeFingerprint) -> Result<PathBuf, ShafolderError> {
        fs::create_dir_all(&self.out_dir).map_err(|e| ShafolderError::io(&self.out_dir, e))?;

        let created = match fingerprint.kind {
            TargetKind::File => self.write_file(fingerprint)?,
            TargetKind::Directory => self.write_directory(fingerprint)?,
        };

        info!(destination = %created.display(), "Wrote read-only copy");
        Ok(created)
    }

    fn write_file(&self, fingerprint: &TreeFingerprint) -> Result<PathBuf, ShafolderError> {
        let tag = self.formatter.format(&fingerprint.aggregate).tag;
        let name = file_name(&fingerprint.root)?;
        let destination = unique_destination(&self.out_dir, &tag, &name)?;

        copy_contents(&fingerprint.root, &destination)?;
        make_readonly(&destination)?;
        Ok(destination)
    }

    fn write_directory(&self, fingerprint: &TreeFingerprint) -> Result<PathBuf, ShafolderError> {
        let tree_tag = self.formatter.format(&fingerprint.aggregate).tag;
        let canonical_root = dunce::canonicalize(&fingerprint.root)
            .map_err(|e| ShafolderError::io(&fingerprint.root, e))?;
        let root_name = file_name(&canonical_root)?;

        let folder = unique_destination(&self.out_dir, &tree_tag, &root_name)?;
        fs::create_dir(&folder).map_err(|e| ShafolderError::io(&folder, e))?;

        for file in &fingerprint.files {
            let parent = match file.relative.parent() {
                Some(rel) => folder.join(rel),
                None => folder.clone(),
            };
            fs::create_dir_all(&parent).map_err(|e| ShafolderError::io(&parent, e))?;

            let tag = self.formatter.format(&file.digest).tag;
            let name = file_name(&file.relative)?;
            let destination = unique_destination(&parent, &tag, &name)?;
            copy_contents(&file.path, &destination)?;
            debug!(from = %file.path.display(), to = %destination.display(), "Copied file");
        }

        make_tree_readonly(&folder)?;
        Ok(folder)
    }
}

fn file_name(path: &Path) -> Result<std::ffi::OsString, ShafolderError> {
    path.file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| ShafolderError::Config(format!("{:?} has no file name", path)))
}

fn copy_contents(from: &Path, to: &Path) -> Result<(), ShafolderError> {
    let mut source = fs::File::open(from).map_err(|e| ShafolderError::io(from, e))?;
    let mut destination = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(to)
        .map_err(|e| ShafolderError::io(to, e))?;
    std::io::copy(&mut source, &mut destination).map_err(|e| ShafolderError::io(to, e))?;
    Ok(())
}
