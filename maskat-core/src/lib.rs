// maskat-core/src/lib.rs
//! # maskat Core Library
//!
//! `maskat-core` finds email-address-like substrings in text and replaces each
//! one with a deterministic, fixed-length token: the first 14 lowercase hex
//! characters of the SHA-256 digest of the match. Every substitution is
//! recorded in an in-memory ledger so a caller can disclose the
//! original → token mapping when it is explicitly allowed to.
//!
//! The library does no I/O. Reading lines and printing results is the job of
//! the `maskat` CLI.
//!
//! ## Modules
//!
//! * `pattern`: The permissive address pattern and its shared, compiled matchers.
//! * `token`: Token derivation from matched bytes.
//! * `replacement`: The `Replacement` ledger entry and PII-safe debug logging.
//! * `masker`: The `Masker` engine that owns the ledger.
//! * `headless`: One-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use maskat_core::Masker;
//!
//! let mut masker = Masker::new();
//! let masked = masker.mask("Contact us at test@example.com");
//! assert_eq!(masked, "Contact us at 973dfe463ec857");
//!
//! for replacement in masker.replacements() {
//!     println!("{}", replacement); // test@example.com -> 973dfe463ec857
//! }
//!
//! masker.reset();
//! assert!(masker.replacements().is_empty());
//! ```
//!
//! ## Error Handling
//!
//! Masking cannot fail. Any input is valid and zero matches is a normal outcome,
//! so the masking API returns plain values rather than `Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod headless;
pub mod masker;
pub mod pattern;
pub mod replacement;
pub mod token;

/// Re-exports the engine.
pub use masker::Masker;

/// Re-exports the ledger entry and logging helpers.
pub use replacement::{redact_sensitive, Replacement, ALLOW_DEBUG_PII_ENV};

/// Re-exports the pattern and matching helpers.
pub use pattern::{count_matches, find_matches, EMAIL_PATTERN};

/// Re-exports token derivation.
pub use token::{derive_token, is_token, TOKEN_LEN};

/// Re-exports one-shot helpers.
pub use headless::mask_string;
