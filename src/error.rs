//! Error types for the shafolder fingerprinting tool.

use std::path::PathBuf;
use thiserror::Error;

/// Mnemonic decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Expected {expected} words, got {actual}")]
    WordCount { expected: usize, actual: usize },

    #[error("Unknown word in mnemonic: {0}")]
    UnknownWord(String),

    #[error("Mnemonic checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    Checksum { expected: u8, actual: u8 },
}

/// Errors surfaced by fingerprinting, persistence, and configuration
#[derive(Debug, Error)]
pub enum ShafolderError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {path:?}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No files to fingerprint in {0:?}")]
    EmptyInput(PathBuf),

    #[error("Mnemonic error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShafolderError {
    /// Wrap an I/O error with the path it failed on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShafolderError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ShafolderError {
    fn from(err: config::ConfigError) -> Self {
        ShafolderError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for ShafolderError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        ShafolderError::Walk {
            path,
            message: err.to_string(),
        }
    }
}
