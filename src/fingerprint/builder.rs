//! Fingerprint builder: enumerate, digest, aggregate

use crate::error::ShafolderError;
use crate::fingerprint::aggregate::aggregate;
use crate::fingerprint::hasher;
use crate::fingerprint::walker::{is_hidden_name, Walker, WalkerConfig};
use crate::types::Digest;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Whether the fingerprinted path was a single file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// Digest of one eligible file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    /// Path as reached from the given root
    pub path: PathBuf,
    /// Path relative to the root (the file name for single-file targets)
    pub relative: PathBuf,
    pub digest: Digest,
}

/// Immutable result of fingerprinting a file or tree
#[derive(Debug, Clone)]
pub struct TreeFingerprint {
    pub root: PathBuf,
    pub kind: TargetKind,
    /// Per-file digests, sorted by path
    pub files: Vec<FileFingerprint>,
    pub aggregate: Digest,
}

impl TreeFingerprint {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Builds [`TreeFingerprint`]s for files and directories
pub struct FingerprintBuilder {
    root: PathBuf,
    walker_config: WalkerConfig,
    excluded: Vec<PathBuf>,
}

impl FingerprintBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
            excluded: Vec::new(),
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Paths left out of a directory walk, such as the manifest and copy folder
    ///
    /// A single-file root is fingerprinted even when it is listed here.
    pub fn with_exclusions(mut self, excluded: Vec<PathBuf>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Fingerprint the root, which may be a file or a directory
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<TreeFingerprint, ShafolderError> {
        let start = Instant::now();
        let metadata = std::fs::metadata(&self.root).map_err(|e| ShafolderError::io(&self.root, e))?;

        let fingerprint = if metadata.is_dir() {
            self.build_directory()?
        } else {
            self.build_file()?
        };

        info!(
            files = fingerprint.file_count(),
            aggregate = %fingerprint.aggregate,
            duration_ms = start.elapsed().as_millis(),
            "Fingerprint completed"
        );
        Ok(fingerprint)
    }

    /// Convenience wrapper returning only the aggregate digest
    pub fn compute_aggregate(&self) -> Result<Digest, ShafolderError> {
        Ok(self.build()?.aggregate)
    }

    fn build_file(&self) -> Result<TreeFingerprint, ShafolderError> {
        let name = self
            .root
            .file_name()
            .ok_or_else(|| ShafolderError::Config(format!("{:?} has no file name", self.root)))?;
        if !self.walker_config.include_hidden && is_hidden_name(name) {
            return Err(ShafolderError::Config(format!(
                "Hidden files are not fingerprinted: {}",
                self.root.display()
            )));
        }

        let digest = hasher::compute_file_digest(&self.root)?;
        Ok(TreeFingerprint {
            root: self.root.clone(),
            kind: TargetKind::File,
            files: vec![FileFingerprint {
                path: self.root.clone(),
                relative: PathBuf::from(name),
                digest,
            }],
            aggregate: digest,
        })
    }

    fn build_directory(&self) -> Result<TreeFingerprint, ShafolderError> {
        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone())
            .with_exclusions(self.excluded.clone());
        let entries = walker.walk()?;

        let files = entries
            .into_iter()
            .map(|entry| {
                let digest = hasher::compute_file_digest(&entry.path)?;
                debug!(path = %entry.path.display(), digest = %digest, "Digested file");
                Ok(FileFingerprint {
                    path: entry.path,
                    relative: entry.relative,
                    digest,
                })
            })
            .collect::<Result<Vec<_>, ShafolderError>>()?;

        let digests: Vec<Digest> = files.iter().map(|f| f.digest).collect();
        let aggregate = aggregate(&digests, &self.root)?;

        Ok(TreeFingerprint {
            root: self.root.clone(),
            kind: TargetKind::Directory,
            files,
            aggregate,
        })
    }
}

/// Fingerprint a path with the given walker configuration
pub fn fingerprint_path(path: &Path, config: &WalkerConfig) -> Result<TreeFingerprint, ShafolderError> {
    FingerprintBuilder::new(path.to_path_buf())
        .with_walker_config(config.clone())
        .build()
}
