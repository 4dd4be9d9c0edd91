//! Mnemonic encoding verification against the reference BIP39 implementation

use shafolder::fingerprint::format::{Formatter, Mode};
use shafolder::fingerprint::hasher;
use shafolder::fingerprint::mnemonic::{Wordlist, MNEMONIC_WORDS};
use shafolder::ShafolderError;
use tempfile::TempDir;

fn reference_words(entropy: &[u8]) -> Vec<String> {
    bip39::Mnemonic::from_entropy(entropy)
        .unwrap()
        .to_string()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_encoding_matches_reference_bip39() {
    let wordlist = Wordlist::english();
    let long = [0xA5u8; 1000];
    let inputs: [&[u8]; 5] = [b"", b"a", b"b", b"hello world", &long];
    for input in inputs {
        let digest = hasher::compute_digest(input);
        let ours = wordlist.encode(&digest);
        assert_eq!(ours.words(), reference_words(digest.as_bytes()).as_slice());
    }
}

#[test]
fn test_every_digest_gives_24_words() {
    let wordlist = Wordlist::english();
    for seed in 0u8..32 {
        let digest = hasher::compute_digest(&[seed]);
        assert_eq!(wordlist.encode(&digest).words().len(), MNEMONIC_WORDS);
    }
}

#[test]
fn test_tag_is_first_two_words_pascal_cased() {
    let formatter = Formatter::new(Mode::Mnemonic, Wordlist::english());
    let digest = hasher::compute_digest(b"hello world");
    let words = reference_words(digest.as_bytes());

    let capitalize = |w: &str| {
        let mut c = w.chars();
        c.next()
            .map(|f| f.to_uppercase().collect::<String>() + c.as_str())
            .unwrap_or_default()
    };
    let expected = capitalize(&words[0]) + &capitalize(&words[1]);

    assert_eq!(formatter.format(&digest).tag, expected);
}

#[test]
fn test_short_wordlist_file_fails_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("short.txt");
    let words: Vec<String> = (0..2047).map(|i| format!("w{}", i)).collect();
    std::fs::write(&path, words.join("\n")).unwrap();

    match Wordlist::load(&path) {
        Err(ShafolderError::Config(msg)) => assert!(msg.contains("2048")),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_custom_wordlist_is_used_for_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.txt");
    let words: Vec<String> = (0..2048).map(|i| format!("w{}", i)).collect();
    std::fs::write(&path, words.join("\n")).unwrap();

    let wordlist = Wordlist::load(&path).unwrap();
    let mnemonic = wordlist.encode(&shafolder::Digest::from_bytes([0u8; 32]));
    assert_eq!(mnemonic.words()[0], "w0");
    // Digits are dropped from tags, leaving letters only
    assert_eq!(mnemonic.tag(), "WW");
}
