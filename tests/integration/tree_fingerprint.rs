//! Integration tests for tree fingerprint determinism

use super::test_utils::write_file;
use shafolder::fingerprint::hasher;
use shafolder::fingerprint::walker::WalkerConfig;
use shafolder::{fingerprint_path, FingerprintBuilder, ShafolderError};
use std::fs;
use tempfile::TempDir;

/// Same filesystem produces the same aggregate
#[test]
fn test_same_tree_same_aggregate() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_file(&root, "file1.txt", b"content1");
    write_file(&root, "file2.txt", b"content2");
    write_file(&root, "dir1/file3.txt", b"content3");

    let builder = FingerprintBuilder::new(root);
    assert_eq!(
        builder.compute_aggregate().unwrap(),
        builder.compute_aggregate().unwrap()
    );
}

/// Two files "a" and "b" give SHA256(sorted digests concatenated)
#[test]
fn test_two_file_tree_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    write_file(&first, "1.txt", b"a");
    write_file(&first, "2.txt", b"b");
    // Reverse name order so the walk visits "b" first
    write_file(&second, "1.txt", b"b");
    write_file(&second, "2.txt", b"a");

    let mut digests = vec![hasher::compute_digest(b"a"), hasher::compute_digest(b"b")];
    digests.sort();
    let mut concatenated = Vec::new();
    for d in &digests {
        concatenated.extend_from_slice(d.as_bytes());
    }
    let expected = hasher::compute_digest(&concatenated);

    let config = WalkerConfig::default();
    assert_eq!(fingerprint_path(&first, &config).unwrap().aggregate, expected);
    assert_eq!(fingerprint_path(&second, &config).unwrap().aggregate, expected);
}

/// Layout and names are irrelevant; only contents count
#[test]
fn test_layout_independence() {
    let temp_dir = TempDir::new().unwrap();
    let flat = temp_dir.path().join("flat");
    let deep = temp_dir.path().join("deep");
    write_file(&flat, "a.txt", b"one");
    write_file(&flat, "b.txt", b"two");
    write_file(&flat, "c.txt", b"three");
    write_file(&deep, "x/y/z/renamed", b"three");
    write_file(&deep, "x/other", b"one");
    write_file(&deep, "two", b"two");

    let config = WalkerConfig::default();
    assert_eq!(
        fingerprint_path(&flat, &config).unwrap().aggregate,
        fingerprint_path(&deep, &config).unwrap().aggregate
    );
}

/// A content change changes the aggregate
#[test]
fn test_content_change_changes_aggregate() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_file(&root, "a.txt", b"one");
    write_file(&root, "b.txt", b"two");

    let builder = FingerprintBuilder::new(root.clone());
    let before = builder.compute_aggregate().unwrap();
    fs::write(root.join("b.txt"), b"changed").unwrap();
    assert_ne!(before, builder.compute_aggregate().unwrap());
}

/// Hidden files never contribute
#[test]
fn test_hidden_files_do_not_contribute() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_file(&root, "a.txt", b"one");
    write_file(&root, "b.txt", b"two");

    let builder = FingerprintBuilder::new(root.clone());
    let before = builder.compute_aggregate().unwrap();
    write_file(&root, ".DS_Store", b"noise");
    write_file(&root, ".git/HEAD", b"ref: refs/heads/main");
    assert_eq!(before, builder.compute_aggregate().unwrap());
}

/// A tree with a single file has that file's own fingerprint
#[test]
fn test_single_file_tree_identity() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_file(&root, "deep/only.bin", b"payload");

    let tree = FingerprintBuilder::new(root.clone()).build().unwrap();
    assert_eq!(tree.file_count(), 1);
    assert_eq!(tree.aggregate, hasher::compute_digest(b"payload"));
}

#[test]
fn test_tree_without_eligible_files_is_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(root.join("empty/nested")).unwrap();
    write_file(&root, ".hidden", b"h");

    match FingerprintBuilder::new(root.clone()).build() {
        Err(ShafolderError::EmptyInput(path)) => assert_eq!(path, root),
        other => panic!("expected EmptyInput, got {:?}", other),
    }
}
