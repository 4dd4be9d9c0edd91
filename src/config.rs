//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, an
//! explicit `--config` file, then `SHAFOLDER__SECTION__KEY` environment
//! variables, each overriding the one before.

use crate::error::ShafolderError;
use crate::fingerprint::format::Mode;
use crate::fingerprint::mnemonic::Wordlist;
use crate::fingerprint::walker::WalkerConfig;
use crate::logging::LoggingConfig;
use crate::persist::DEFAULT_MANIFEST_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShafolderConfig {
    /// Which files take part in a tree fingerprint
    #[serde(default)]
    pub walk: WalkerConfig,

    /// Where copies and manifests are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Mnemonic dictionary
    #[serde(default)]
    pub mnemonic: MnemonicConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives the copy folder and the manifest
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Copy folder name; defaults to `.sha256` or `.bip39` by mode
    #[serde(default)]
    pub copy_dir: Option<PathBuf>,

    /// Manifest file name
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// Emphasize the banner with terminal colors
    #[serde(default)]
    pub color: bool,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_manifest_name() -> String {
    DEFAULT_MANIFEST_NAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            copy_dir: None,
            manifest_name: default_manifest_name(),
            color: false,
        }
    }
}

impl OutputConfig {
    /// Folder receiving renamed copies for the given mode
    pub fn copy_dir_for(&self, mode: Mode) -> PathBuf {
        match &self.copy_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.join(mode.copy_dir_name()),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(&self.manifest_name)
    }
}

/// Mnemonic dictionary settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MnemonicConfig {
    /// Custom wordlist file (one word per line); BIP39 English when unset
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
}

impl MnemonicConfig {
    /// Load the configured wordlist, validating it up front
    pub fn load_wordlist(&self) -> Result<Wordlist, ShafolderError> {
        match &self.wordlist {
            Some(path) => Wordlist::load(path),
            None => Ok(Wordlist::english()),
        }
    }
}

impl ShafolderConfig {
    /// Validate values the type system does not constrain
    pub fn validate(&self) -> Result<(), ShafolderError> {
        let name = self.output.manifest_name.trim();
        if name.is_empty() {
            return Err(ShafolderError::Config(
                "output.manifest_name cannot be empty".to_string(),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ShafolderError::Config(format!(
                "output.manifest_name must be a file name, not a path: {}",
                name
            )));
        }
        if self.output.base_dir.as_os_str().is_empty() {
            return Err(ShafolderError::Config(
                "output.base_dir cannot be empty".to_string(),
            ));
        }
        if self.walk.max_depth == Some(0) {
            return Err(ShafolderError::Config(
                "walk.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads [`ShafolderConfig`] from all sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global file, an optional explicit file, and the environment
    pub fn load(explicit: Option<&Path>) -> Result<ShafolderConfig, ShafolderError> {
        let mut builder = config::Config::builder();
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);

        let config: ShafolderConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a single file over the defaults, ignoring global and environment sources
    pub fn load_from_file(path: &Path) -> Result<ShafolderConfig, ShafolderError> {
        let builder = sources::explicit_file::add_to_builder(config::Config::builder(), path)?;
        let config: ShafolderConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
