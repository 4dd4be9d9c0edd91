//! CLI parse: clap types for shafolder. No behavior; definitions only.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Shafolder CLI - content fingerprints for files and folders
#[derive(Parser, Debug)]
#[command(name = "shafolder", version)]
#[command(about = "Order-independent SHA-256 fingerprint of a file or folder, as hex or BIP39 words")]
pub struct Cli {
    /// File or folder to fingerprint
    pub path: PathBuf,

    /// Show the BIP39 mnemonic instead of the SHA-256 hex digest
    #[arg(short = 'b', long)]
    pub bip39: bool,

    /// Show the fingerprint of every file in the folder
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the banner; print only fingerprints
    #[arg(short, long)]
    pub terse: bool,

    /// Copy content, renamed with its tag and read-only, into .sha256/ or .bip39/
    #[arg(short = 'c', long)]
    pub makecopy: bool,

    /// Write a SHA256SUMS manifest of every file
    #[arg(short, long, conflicts_with = "makecopy")]
    pub manifest: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
