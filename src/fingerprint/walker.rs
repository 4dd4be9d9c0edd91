//! Filesystem walker yielding the files that take part in a tree fingerprint

use crate::error::ShafolderError;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

/// A regular file found under the walk root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as reached from the root (root joined with the relative path)
    pub path: PathBuf,
    /// Path relative to the root
    pub relative: PathBuf,
}

/// Walker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Include files and folders whose names begin with '.'
    #[serde(default)]
    pub include_hidden: bool,
    /// Whether to follow symbolic links (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// File or folder names to skip, matched against whole path components
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Returns true if a file name marks a hidden entry
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// A concrete path kept out of the walk, identified by its resolved parent and name
///
/// The path need not exist yet; a parent that cannot be resolved excludes nothing.
#[derive(Debug, Clone)]
struct Exclusion {
    dir: PathBuf,
    name: OsString,
}

impl Exclusion {
    fn resolve(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_os_string();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dir = dunce::canonicalize(parent).ok()?;
        Some(Self { dir, name })
    }

    fn matches(&self, entry: &DirEntry) -> bool {
        if entry.file_name() != self.name.as_os_str() {
            return false;
        }
        entry
            .path()
            .parent()
            .and_then(|parent| dunce::canonicalize(parent).ok())
            .map_or(false, |parent| parent == self.dir)
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
    excluded: Vec<PathBuf>,
}

impl Walker {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, WalkerConfig::default())
    }

    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self {
            root,
            config,
            excluded: Vec::new(),
        }
    }

    /// Skip these exact paths (and everything below them) wherever they sit in the tree
    pub fn with_exclusions(mut self, excluded: Vec<PathBuf>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Walk the tree and collect every eligible file exactly once
    ///
    /// Entries come back sorted by path; ordering never feeds the digest.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn walk(&self) -> Result<Vec<FileEntry>, ShafolderError> {
        let mut files = Vec::new();
        let exclusions: Vec<Exclusion> = self
            .excluded
            .iter()
            .filter_map(|path| Exclusion::resolve(path))
            .collect();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| !self.should_skip(entry, &exclusions));

        for entry in walker {
            let entry = entry?;

            if !entry.file_type().is_file() {
                if entry.path_is_symlink() {
                    trace!(path = %entry.path().display(), "Skipping symlink");
                }
                continue;
            }

            let path = entry.path().to_path_buf();
            let relative = path
                .strip_prefix(&self.root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone());

            files.push(FileEntry { path, relative });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(file_count = files.len(), "Walked tree");

        Ok(files)
    }

    /// Hidden, ignored, and excluded entries are pruned with their whole subtree; the root never is
    fn should_skip(&self, entry: &DirEntry, exclusions: &[Exclusion]) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        if exclusions.iter().any(|exclusion| exclusion.matches(entry)) {
            debug!(path = %entry.path().display(), "Skipping excluded output path");
            return true;
        }

        let name = entry.file_name();
        if !self.config.include_hidden && is_hidden_name(name) {
            trace!(path = %entry.path().display(), "Skipping hidden entry");
            return true;
        }

        let name = name.to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.as_str() == name)
    }
}
