//! Default command: mask input line by line and stream it to the output.

use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};

use maskat_core::Masker;

use crate::errors::MaskatError;
use crate::utils::line_reader::for_each_line;

/// Counters reported after a mask run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskStats {
    pub lines: usize,
    pub replacements: usize,
}

/// Masks every line of `reader` and writes it, newline-terminated, to `writer`.
///
/// Each line is written as soon as it is masked. The ledger is never
/// disclosed here, so it is cleared after every line to keep memory flat.
pub fn run_mask<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<MaskStats> {
    info!("Starting mask mode.");

    let mut masker = Masker::new();
    let mut replacements = 0usize;

    let lines = for_each_line(reader, |line| {
        let masked = masker.mask_bytes(line);
        if !masker.is_empty() {
            debug!("Masked {} address(es) in current line.", masker.len());
            replacements += masker.len();
            masker.reset();
        }
        writer.write_all(&masked).map_err(MaskatError::OutputWrite)?;
        writer.write_all(b"\n").map_err(MaskatError::OutputWrite)?;
        Ok(())
    })?;
    writer.flush().map_err(MaskatError::OutputWrite)?;

    let stats = MaskStats { lines, replacements };
    info!(
        "Mask mode completed: {} line(s), {} address(es) masked.",
        stats.lines, stats.replacements
    );
    Ok(stats)
}
