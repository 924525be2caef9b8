//! Provides the `Replacement` ledger entry and PII-safe debug logging
//! for masking events within the `maskat-core` library.

use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

/// Environment variable that allows original values to appear in debug logs.
pub const ALLOW_DEBUG_PII_ENV: &str = "MASKAT_ALLOW_DEBUG_PII";

lazy_static! {
    /// Read once, so toggling the variable mid-run has no effect.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var(ALLOW_DEBUG_PII_ENV)
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One substitution made by a `Masker`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Replacement {
    /// The exact matched substring.
    pub original: String,
    /// The token that replaced it.
    pub masked: String,
}

impl Replacement {
    pub fn new(original: impl Into<String>, masked: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            masked: masked.into(),
        }
    }
}

/// Renders the disclosure line, `original -> masked`.
impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.original, self.masked)
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub(crate) fn log_replacement_debug(module_path: &str, replacement: &Replacement) {
    debug!(
        "{} Masked match: Original='{}', Token='{}'",
        module_path,
        get_loggable_content(&replacement.original),
        replacement.masked
    );
}
