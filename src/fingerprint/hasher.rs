//! Content digests using SHA-256

use crate::error::ShafolderError;
use crate::types::Digest;
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Digest a byte stream, reading it to completion exactly once
pub fn compute_stream_digest<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(Digest::from_bytes(hasher.finalize().into()))
}

/// Digest in-memory bytes
pub fn compute_digest(data: &[u8]) -> Digest {
    Digest::from_bytes(Sha256::digest(data).into())
}

/// Digest a file's contents; errors carry the failing path
pub fn compute_file_digest(path: &Path) -> Result<Digest, ShafolderError> {
    let file = File::open(path).map_err(|e| ShafolderError::io(path, e))?;
    compute_stream_digest(file).map_err(|e| ShafolderError::io(path, e))
}
