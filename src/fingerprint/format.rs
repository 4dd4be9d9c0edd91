//! Full and tag renderings of a digest

use crate::fingerprint::mnemonic::Wordlist;
use crate::types::Digest;
use serde::{Deserialize, Serialize};

/// Hex tag length in characters
pub const HEX_TAG_LEN: usize = 6;

/// Rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Hex,
    Mnemonic,
}

impl Mode {
    pub fn from_bip39_flag(bip39: bool) -> Self {
        if bip39 {
            Mode::Mnemonic
        } else {
            Mode::Hex
        }
    }

    /// Label used in banners and reports
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Hex => "SHA256",
            Mode::Mnemonic => "BIP39",
        }
    }

    /// Default name of the copy folder for this mode
    pub fn copy_dir_name(&self) -> &'static str {
        match self {
            Mode::Hex => ".sha256",
            Mode::Mnemonic => ".bip39",
        }
    }
}

/// The full text and the tag derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    pub full: String,
    pub tag: String,
}

/// Renders digests in a fixed mode against a loaded wordlist
#[derive(Debug, Clone)]
pub struct Formatter {
    mode: Mode,
    wordlist: Wordlist,
}

impl Formatter {
    pub fn new(mode: Mode, wordlist: Wordlist) -> Self {
        Self { mode, wordlist }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn format(&self, digest: &Digest) -> Rendering {
        match self.mode {
            Mode::Hex => {
                let full = digest.to_hex();
                let tag = full[..HEX_TAG_LEN].to_string();
                Rendering { full, tag }
            }
            Mode::Mnemonic => {
                let mnemonic = self.wordlist.encode(digest);
                Rendering {
                    full: mnemonic.to_lines(),
                    tag: mnemonic.tag(),
                }
            }
        }
    }
}
