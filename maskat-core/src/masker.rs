// maskat-core/src/masker.rs
//! The masking engine.
//!
//! A `Masker` owns the ledger of every replacement it has made since it was
//! created or last reset. The pattern itself lives in [`crate::pattern`] and
//! is shared by all instances.
//!
//! License: MIT OR APACHE 2.0

use log::trace;
use regex::bytes;
use regex::Captures;

use crate::pattern::{EMAIL_REGEX, EMAIL_REGEX_BYTES};
use crate::replacement::{log_replacement_debug, Replacement};
use crate::token::derive_token;

/// Replaces address-like substrings with deterministic tokens and records
/// each substitution.
///
/// Not synchronized: `mask` takes `&mut self`, so sharing one instance across
/// threads requires an external lock.
#[derive(Debug, Default, Clone)]
pub struct Masker {
    replacements: Vec<Replacement>,
}

impl Masker {
    /// Creates an engine with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Masks every match in `text` and returns the transformed text.
    ///
    /// Non-matching text is returned byte-for-byte. The ledger grows by
    /// exactly the number of matches, in order of appearance.
    pub fn mask(&mut self, text: &str) -> String {
        let before = self.replacements.len();
        let masked = EMAIL_REGEX.replace_all(text, |caps: &Captures| {
            self.record(caps[0].as_bytes())
        });
        trace!("mask: {} new replacement(s)", self.replacements.len() - before);
        masked.into_owned()
    }

    /// Byte-oriented variant of [`Masker::mask`] for input that may not be
    /// valid UTF-8. Bytes outside matches pass through untouched.
    pub fn mask_bytes(&mut self, line: &[u8]) -> Vec<u8> {
        let before = self.replacements.len();
        let masked = EMAIL_REGEX_BYTES.replace_all(line, |caps: &bytes::Captures| {
            self.record(&caps[0])
        });
        trace!("mask_bytes: {} new replacement(s)", self.replacements.len() - before);
        masked.into_owned()
    }

    /// All replacements since creation or the last reset, in production order.
    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    /// Consumes the engine and hands over its ledger.
    pub fn into_replacements(self) -> Vec<Replacement> {
        self.replacements
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Clears the ledger. Idempotent.
    pub fn reset(&mut self) {
        self.replacements.clear();
    }

    fn record(&mut self, original: &[u8]) -> String {
        let masked = derive_token(original);
        // The pattern only matches whole code points, so this is lossless.
        let original = String::from_utf8_lossy(original).into_owned();
        let replacement = Replacement { original, masked: masked.clone() };
        log_replacement_debug(module_path!(), &replacement);
        self.replacements.push(replacement);
        masked
    }
}
