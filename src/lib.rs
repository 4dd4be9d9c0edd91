//! Shafolder: content fingerprints for files and folders
//!
//! Computes an order-independent SHA-256 fingerprint of a file or directory
//! tree, renders it as hex or as a 24-word BIP39 mnemonic, and can write
//! fingerprint-named read-only copies or a SHA256SUMS manifest.

pub mod cli;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod persist;
pub mod types;

pub use error::ShafolderError;
pub use fingerprint::builder::{fingerprint_path, FingerprintBuilder, TreeFingerprint};
pub use fingerprint::format::{Formatter, Mode, Rendering};
pub use types::Digest;
