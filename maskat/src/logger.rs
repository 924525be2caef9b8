//! Logger initialization for the `maskat` binary.
//!
//! Logs always go to stderr so they never mix with masked output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Maps the `--quiet` / `--debug` flags to a level override.
///
/// `--quiet` wins over `--debug`. `None` means "defer to `RUST_LOG`".
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// Initializes `env_logger`. An explicit level ignores `RUST_LOG` entirely.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = match level_override {
        Some(level) => {
            let mut b = Builder::new();
            b.filter_level(level);
            b
        }
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)),
    };
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
