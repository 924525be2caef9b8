//! Command runners for the `maskat` CLI.
//!
//! Each runner takes an already-opened reader and writer so it can be driven
//! from tests with in-memory buffers.

pub mod list_sensitive_data;
pub mod mask;
