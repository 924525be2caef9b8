//! Runtime configuration constants for the `maskat` CLI.
//!
//! Command-line flags are defined in [`crate::cli`]; this module holds the
//! names and sizes shared between the CLI surface and the command runners.

/// Environment variable that opts in to `list-sensitive-data`.
pub const LIST_SENSITIVE_DATA_ENV: &str = "MASKAT_LIST_SENSITIVE_DATA";

/// Initial capacity of the per-line buffer. Lines longer than this still
/// work; the buffer grows instead of truncating.
pub const LINE_BUFFER_CAPACITY: usize = 1024 * 1024; // 1 MiB

/// Read buffer size used when input comes from a file.
pub const FILE_READ_BUFFER_SIZE: usize = 64 * 1024;

/// Log filter applied when neither a flag nor `RUST_LOG` says otherwise.
pub const DEFAULT_LOG_FILTER: &str = "warn";
