// maskat/src/main.rs
//! maskat entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the mask or
//! list-sensitive-data runner.

use anyhow::Result;
use clap::Parser;
use std::io;

use maskat::cli::{Cli, Commands};
use maskat::commands::{list_sensitive_data, mask};
use maskat::logger;
use maskat::utils::line_reader::open_input;
use maskat::MaskatError;

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match cli.command {
        None => {
            let reader = open_input(cli.input_file.as_deref())?;
            mask::run_mask(reader, &mut writer)?;
        }
        Some(Commands::ListSensitiveData(cmd)) => {
            // Refuse before touching the input.
            let permit = list_sensitive_data::ensure_permitted(cmd.allow_disclosure)?;
            let reader = open_input(cli.input_file.as_deref())?;
            list_sensitive_data::run_list_sensitive_data(permit, reader, &mut writer, cmd.format)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    match run(cli) {
        Err(e) if e.downcast_ref::<MaskatError>().is_some_and(MaskatError::is_broken_pipe) => {
            log::debug!("Output closed early; stopping.");
            Ok(())
        }
        other => other,
    }
}
