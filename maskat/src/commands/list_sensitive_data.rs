//! `list-sensitive-data`: disclose the original -> token mapping.
//!
//! Disclosure is gated behind an explicit opt-in. All input is consumed
//! first; the replacements are printed only after the input is exhausted.

use anyhow::Result;
use log::{info, warn};
use std::io::{BufRead, Write};

use maskat_core::{Masker, Replacement};

use crate::cli::LedgerFormat;
use crate::errors::MaskatError;
use crate::utils::line_reader::for_each_line;

/// Proof that the opt-in check passed. Only [`ensure_permitted`] creates one.
#[derive(Debug)]
pub struct DisclosurePermit(());

/// Checks the opt-in before any input is read.
pub fn ensure_permitted(allow_disclosure: bool) -> Result<DisclosurePermit, MaskatError> {
    if allow_disclosure {
        warn!("Sensitive data disclosure enabled; original values will be printed.");
        Ok(DisclosurePermit(()))
    } else {
        Err(MaskatError::DisclosureNotPermitted)
    }
}

/// Reads all of `reader`, then writes every replacement to `writer` in the
/// order it was produced. Returns the number of replacements written.
pub fn run_list_sensitive_data<R: BufRead, W: Write>(
    _permit: DisclosurePermit,
    reader: R,
    writer: &mut W,
    format: LedgerFormat,
) -> Result<usize> {
    info!("Starting list-sensitive-data mode.");

    let mut masker = Masker::new();
    let lines = for_each_line(reader, |line| {
        // Only the ledger matters here; the masked text is discarded.
        masker.mask_bytes(line);
        Ok(())
    })?;

    let replacements = masker.replacements();
    write_replacements(replacements, writer, format)?;

    info!(
        "Listed {} replacement(s) from {} line(s).",
        replacements.len(),
        lines
    );
    Ok(replacements.len())
}

fn write_replacements<W: Write>(
    replacements: &[Replacement],
    writer: &mut W,
    format: LedgerFormat,
) -> Result<(), MaskatError> {
    match format {
        LedgerFormat::Text => {
            for r in replacements {
                writeln!(writer, "{}", r).map_err(MaskatError::OutputWrite)?;
            }
        }
        LedgerFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, replacements)?;
            writeln!(writer).map_err(MaskatError::OutputWrite)?;
        }
    }
    writer.flush().map_err(MaskatError::OutputWrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn list(input: &str, format: LedgerFormat) -> String {
        let permit = ensure_permitted(true).unwrap();
        let mut out = Vec::new();
        run_list_sensitive_data(permit, Cursor::new(input.as_bytes()), &mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_refused_without_opt_in() {
        let err = ensure_permitted(false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("MASKAT_LIST_SENSITIVE_DATA environment variable is not set"));
        assert!(message.contains("explicit opt-in"));
    }

    #[test]
    fn test_lists_in_order_across_lines() {
        let out = list("first a@b.co\nnone\nsecond c@d.io then a@b.co\n", LedgerFormat::Text);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("a@b.co -> "));
        assert!(lines[1].starts_with("c@d.io -> "));
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn test_known_mapping() {
        let out = list("Contact test@example.com for help", LedgerFormat::Text);
        assert_eq!(out, "test@example.com -> 973dfe463ec857\n");
    }

    #[test]
    fn test_no_matches_prints_nothing() {
        assert_eq!(list("nothing to see\n", LedgerFormat::Text), "");
    }

    #[test]
    fn test_json_format() {
        let out = list("test@example.com\n", LedgerFormat::Json);
        let parsed: Vec<Replacement> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![Replacement::new("test@example.com", "973dfe463ec857")]);
    }

    #[test]
    fn test_json_format_empty_ledger() {
        assert_eq!(list("", LedgerFormat::Json).trim(), "[]");
    }
}
