//! Order-independent aggregation of per-file digests
//!
//! Aggregate = SHA256(concat(sort(digests))) for more than one digest, and the
//! digest itself for exactly one. Sorting first makes the result depend only
//! on the multiset of file contents, never on names or walk order.

use crate::error::ShafolderError;
use crate::fingerprint::hasher;
use crate::types::{Digest, DIGEST_LEN};
use std::path::Path;
use tracing::debug;

/// Combine digests into one aggregate digest
///
/// `origin` is only used to name the tree in the `EmptyInput` error.
pub fn aggregate(digests: &[Digest], origin: &Path) -> Result<Digest, ShafolderError> {
    match digests {
        [] => Err(ShafolderError::EmptyInput(origin.to_path_buf())),
        [single] => Ok(*single),
        _ => {
            let mut sorted = digests.to_vec();
            sorted.sort();

            let mut concatenated = Vec::with_capacity(sorted.len() * DIGEST_LEN);
            for digest in &sorted {
                concatenated.extend_from_slice(digest.as_bytes());
            }

            let result = hasher::compute_digest(&concatenated);
            debug!(count = sorted.len(), aggregate = %result, "Aggregated digests");
            Ok(result)
        }
    }
}
