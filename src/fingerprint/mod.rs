//! Content fingerprints for files and folders
//!
//! Per-file SHA-256 digests are folded into one aggregate that depends only on
//! the multiset of file contents, then rendered as hex or as a BIP39 mnemonic.

pub mod aggregate;
pub mod builder;
pub mod format;
pub mod hasher;
pub mod mnemonic;
pub mod walker;
