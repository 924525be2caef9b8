// File: maskat-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot masking without managing a `Masker`.

use crate::masker::Masker;
use crate::replacement::Replacement;

/// Masks `content` with a fresh engine and returns the masked text together
/// with the replacements it produced.
pub fn mask_string(content: &str) -> (String, Vec<Replacement>) {
    let mut masker = Masker::new();
    let masked = masker.mask(content);
    (masked, masker.into_replacements())
}
