//! pattern.rs - The address-like pattern and its compiled matchers.
//!
//! The pattern is intentionally permissive. It accepts everything a strict
//! mail-address grammar accepts, plus local parts with leading, trailing or
//! consecutive dots, so malformed-but-sensitive-looking addresses are still
//! caught.
//!
//! Both compiled forms are built once, on first use, and shared read-only
//! by every `Masker`.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{bytes, Regex, RegexBuilder};

/// The permissive address pattern.
///
/// Local part: letters, digits and ``!#$%&'*+/=?^_`{|}~.-`` with no dot rules.
/// Domain: dot-separated labels that start and end with a letter or digit,
/// with at least one dot.
pub const EMAIL_PATTERN: &str = r"(?i)[a-z0-9!#$%&'*+/=?^_`{|}~.-]+@[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+";

// 10 MB limit for the compiled program, same ceiling for both forms.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

lazy_static! {
    /// Matcher over UTF-8 text.
    pub(crate) static ref EMAIL_REGEX: Regex = {
        debug!("Compiling address pattern for text input.");
        RegexBuilder::new(EMAIL_PATTERN)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .expect("EMAIL_PATTERN is a valid regex")
    };

    /// Matcher over raw bytes, for input that is not guaranteed to be UTF-8.
    pub(crate) static ref EMAIL_REGEX_BYTES: bytes::Regex = {
        debug!("Compiling address pattern for byte input.");
        bytes::RegexBuilder::new(EMAIL_PATTERN)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .expect("EMAIL_PATTERN is a valid regex")
    };
}

/// Returns every non-overlapping match in `text`, left to right.
pub fn find_matches(text: &str) -> Vec<&str> {
    EMAIL_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts the matches in `text` without allocating them.
pub fn count_matches(text: &str) -> usize {
    EMAIL_REGEX.find_iter(text).count()
}
