//! Optional on-disk outputs: renamed read-only copies and the SHA256SUMS manifest.
//!
//! A failure part-way through leaves whatever was already written; copies and
//! manifests are not rolled back.

pub mod copy;
pub mod manifest;
pub mod readonly;

pub use copy::CopyWriter;
pub use manifest::{write_manifest, ManifestWriter, DEFAULT_MANIFEST_NAME};
