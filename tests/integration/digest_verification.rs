//! Digest Implementation Verification Tests
//!
//! Verifies that content digests are plain SHA-256 and that the aggregate
//! follows sort-then-concatenate-then-hash.

use sha2::{Digest as _, Sha256};
use shafolder::fingerprint::aggregate::aggregate;
use shafolder::fingerprint::hasher;
use shafolder::Digest;
use std::path::Path;

#[test]
fn test_content_digest_matches_sha256() {
    let content = b"test content";
    let ours = hasher::compute_digest(content);
    let direct: [u8; 32] = Sha256::digest(content).into();
    assert_eq!(ours.as_bytes(), &direct);
}

#[test]
fn test_empty_stream_is_well_known_digest() {
    let digest = hasher::compute_stream_digest(std::io::empty()).unwrap();
    assert_eq!(
        digest.to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_abc_vector() {
    assert_eq!(
        hasher::compute_digest(b"abc").to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_aggregate_of_a_and_b_matches_manual_computation() {
    let a: [u8; 32] = Sha256::digest(b"a").into();
    let b: [u8; 32] = Sha256::digest(b"b").into();

    let mut sorted = vec![a, b];
    sorted.sort();
    let expected: [u8; 32] = Sha256::digest(sorted.concat()).into();

    let forward = aggregate(&[Digest::from(a), Digest::from(b)], Path::new("t")).unwrap();
    let backward = aggregate(&[Digest::from(b), Digest::from(a)], Path::new("t")).unwrap();

    assert_eq!(forward.as_bytes(), &expected);
    assert_eq!(backward, forward);
}

#[test]
fn test_aggregate_identity_for_single_digest() {
    let d = hasher::compute_digest(b"solo");
    assert_eq!(aggregate(&[d], Path::new("t")).unwrap(), d);
}
