//! errors.rs - Custom error types for the maskat CLI.
//!
//! The masking engine itself cannot fail; every variant here belongs to the
//! I/O and permission layer around it.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::config::LIST_SENSITIVE_DATA_ENV;

/// All error types surfaced by the `maskat` commands.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaskatError {
    #[error(
        "{} environment variable is not set\nThis command requires explicit opt-in for security reasons.",
        LIST_SENSITIVE_DATA_ENV
    )]
    DisclosureNotPermitted,

    #[error("Error reading input: {0}")]
    InputRead(std::io::Error),

    #[error("Failed to write output: {0}")]
    OutputWrite(std::io::Error),

    #[error("Failed to serialize replacements: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MaskatError {
    /// True when the reader of our stdout went away (e.g. `maskat | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, MaskatError::OutputWrite(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
