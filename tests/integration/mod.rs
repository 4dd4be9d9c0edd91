//! Integration tests for shafolder

mod digest_verification;
mod mnemonic_verification;
mod test_utils;
mod tree_fingerprint;
