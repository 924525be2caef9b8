// maskat/src/lib.rs
//! # maskat CLI Application
//!
//! `maskat` is `cat` with masked sensitive data: it copies its input to stdout
//! with every email-like substring replaced by a deterministic token. The
//! `list-sensitive-data` command discloses the original → token mapping, but
//! only after an explicit opt-in.
//!
//! All detection and token logic lives in `maskat-core`; this crate only deals
//! with arguments, input/output and logging.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logger;
pub mod utils;

pub use errors::MaskatError;
