//! token.rs - Deterministic token derivation.
//!
//! A token is the first `TOKEN_LEN` lowercase hex characters of the SHA-256
//! digest of the matched bytes. No salt, no seed: the same input yields the
//! same token in every process.
//!
//! License: MIT OR APACHE 2.0

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest (56 bits).
pub const TOKEN_LEN: usize = 14;

/// Derives the masking token for `original`.
pub fn derive_token(original: &[u8]) -> String {
    let digest = Sha256::digest(original);
    // Each byte renders as two hex chars, so only half the digest is needed.
    hex::encode(&digest[..TOKEN_LEN / 2])
}

/// Returns true if `candidate` has the shape of a token.
pub fn is_token(candidate: &str) -> bool {
    candidate.len() == TOKEN_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
