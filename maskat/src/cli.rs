//! This file defines the command-line interface (CLI) for the maskat application,
//! including all available commands and their arguments.

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "maskat",
    version = env!("CARGO_PKG_VERSION"),
    about = "maskat is 'cat with mask sensitive data'",
    long_about = "maskat reads text line by line and writes it back with every email-like address replaced by the first 14 hex characters of its SHA-256 hash. The same address always yields the same token, so masked logs stay correlatable without exposing the addresses themselves.",
    after_help = "With no command, reads from stdin and writes masked text to stdout.\nlist-sensitive-data requires the MASKAT_LIST_SENSITIVE_DATA environment variable.",
)]
pub struct Cli {
    /// Read input from a file instead of stdin.
    #[arg(long = "input-file", short = 'i', value_name = "FILE", global = true, help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Disable all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run. Masks stdin to stdout when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available commands for the `maskat` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all replacements (original -> masked).
    #[command(about = "List all replacements (original -> masked). Requires MASKAT_LIST_SENSITIVE_DATA.")]
    ListSensitiveData(ListSensitiveDataCommand),
}

/// Arguments for the `list-sensitive-data` command.
#[derive(Parser, Debug)]
pub struct ListSensitiveDataCommand {
    /// Explicit opt-in for disclosing original values. Falsey values
    /// (`0`, `false`, `no`, `off`, empty) count as not set.
    #[arg(
        long = "allow-disclosure",
        env = "MASKAT_LIST_SENSITIVE_DATA",
        hide_env_values = true,
        value_parser = FalseyValueParser::new(),
        help = "Opt in to disclosing original values."
    )]
    pub allow_disclosure: bool,

    /// Output format for the replacement list.
    #[arg(long = "format", value_enum, default_value = "text", help = "Output format for the replacement list.")]
    pub format: LedgerFormat,
}

/// How the replacement ledger is printed.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum LedgerFormat {
    /// One `original -> masked` line per replacement.
    #[default]
    Text,
    /// A JSON array of `{ "original", "masked" }` objects.
    Json,
}
