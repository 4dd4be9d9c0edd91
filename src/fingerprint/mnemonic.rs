//! BIP39 mnemonic encoding of digests
//!
//! A 256-bit digest plus an 8-bit checksum (the first byte of its own SHA-256)
//! gives 264 bits, read MSB first as 24 groups of 11 bits. Each group indexes
//! the 2048-word [`Wordlist`].

use crate::error::{MnemonicError, ShafolderError};
use crate::fingerprint::hasher;
use crate::types::{Digest, DIGEST_LEN};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Number of entries every wordlist must have (2^11)
pub const WORDLIST_LEN: usize = 2048;

/// Words in a mnemonic for a 256-bit digest
pub const MNEMONIC_WORDS: usize = 24;

const BITS_PER_WORD: usize = 11;
const CHECKSUM_BITS: usize = DIGEST_LEN * 8 / 32;

/// Validated 2048-word dictionary
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// The BIP39 English wordlist
    pub fn english() -> Self {
        let words: Vec<String> = bip39::Language::English
            .word_list()
            .iter()
            .map(|w| w.to_string())
            .collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();
        Self { words, index }
    }

    /// Build a wordlist, failing fast unless there are exactly 2048 unique, non-empty words
    pub fn from_words(words: Vec<String>) -> Result<Self, ShafolderError> {
        if words.len() != WORDLIST_LEN {
            return Err(ShafolderError::Config(format!(
                "Wordlist must contain exactly {} words, found {}",
                WORDLIST_LEN,
                words.len()
            )));
        }

        let mut normalized = Vec::with_capacity(WORDLIST_LEN);
        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            let word: String = word.trim().nfc().collect();
            if word.is_empty() {
                return Err(ShafolderError::Config(format!(
                    "Wordlist entry {} is empty",
                    i
                )));
            }
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(ShafolderError::Config(format!(
                    "Wordlist contains duplicate word '{}'",
                    word
                )));
            }
            normalized.push(word);
        }

        Ok(Self {
            words: normalized,
            index,
        })
    }

    /// Parse a wordlist from text with one word per line; blank lines are ignored
    pub fn parse(contents: &str) -> Result<Self, ShafolderError> {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::from_words(words)
    }

    /// Load and validate a wordlist file
    pub fn load(path: &Path) -> Result<Self, ShafolderError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ShafolderError::io(path, e))?;
        let wordlist = Self::parse(&contents).map_err(|e| match e {
            ShafolderError::Config(msg) => {
                ShafolderError::Config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        info!(path = %path.display(), "Loaded custom wordlist");
        Ok(wordlist)
    }

    pub fn word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    pub fn index_of(&self, word: &str) -> Option<u16> {
        let normalized: String = word.nfc().collect();
        self.index.get(&normalized).copied()
    }

    /// Encode a digest as 24 words
    pub fn encode(&self, digest: &Digest) -> Mnemonic {
        let checksum = checksum_byte(digest);
        let mut bits = BitReader::new(digest.as_bytes(), checksum);

        let words = (0..MNEMONIC_WORDS)
            .map(|_| self.word(bits.take(BITS_PER_WORD)).to_string())
            .collect();

        Mnemonic { words }
    }

    /// Decode 24 words back into the digest, verifying the checksum
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Result<Digest, MnemonicError> {
        if words.len() != MNEMONIC_WORDS {
            return Err(MnemonicError::WordCount {
                expected: MNEMONIC_WORDS,
                actual: words.len(),
            });
        }

        let mut acc: u32 = 0;
        let mut acc_bits = 0usize;
        let mut out = Vec::with_capacity(DIGEST_LEN + 1);
        for word in words {
            let word = word.as_ref();
            let index = self
                .index_of(word)
                .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))?;
            acc = (acc << BITS_PER_WORD) | u32::from(index);
            acc_bits += BITS_PER_WORD;
            while acc_bits >= 8 {
                acc_bits -= 8;
                out.push((acc >> acc_bits) as u8);
                acc &= (1 << acc_bits) - 1;
            }
        }

        let actual = out.pop().unwrap_or_default();
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&out);
        let digest = Digest::from_bytes(bytes);

        let expected = checksum_byte(&digest);
        if expected != actual {
            return Err(MnemonicError::Checksum { expected, actual });
        }
        debug!("Decoded mnemonic");
        Ok(digest)
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::english()
    }
}

fn checksum_byte(digest: &Digest) -> u8 {
    hasher::compute_digest(digest.as_bytes()).as_bytes()[0] >> (8 - CHECKSUM_BITS)
}

/// MSB-first reader over digest bytes followed by the checksum byte
struct BitReader<'a> {
    bytes: &'a [u8; DIGEST_LEN],
    checksum: u8,
    position: usize,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8; DIGEST_LEN], checksum: u8) -> Self {
        Self {
            bytes,
            checksum,
            position: 0,
        }
    }

    fn bit(&self, position: usize) -> u16 {
        let byte = if position / 8 < DIGEST_LEN {
            self.bytes[position / 8]
        } else {
            self.checksum
        };
        u16::from((byte >> (7 - position % 8)) & 1)
    }

    fn take(&mut self, count: usize) -> u16 {
        let mut value = 0u16;
        for _ in 0..count {
            value = (value << 1) | self.bit(self.position);
            self.position += 1;
        }
        value
    }
}

/// Ordered 24-word encoding of a digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Two-word PascalCase tag, letters only (e.g. `AbandonAbility`)
    pub fn tag(&self) -> String {
        self.words.iter().take(2).map(|w| pascal_word(w)).collect()
    }

    /// Two lines of twelve space-separated words
    pub fn to_lines(&self) -> String {
        let (first, second) = self.words.split_at(self.words.len() / 2);
        format!("{}\n{}", first.join(" "), second.join(" "))
    }
}

fn pascal_word(word: &str) -> String {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    match letters.next() {
        Some(first) => first
            .to_uppercase()
            .chain(letters.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
