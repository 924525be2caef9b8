//! Line-oriented input for the `maskat` commands.
//!
//! Lines are handled as raw bytes so input that is not valid UTF-8 passes
//! through untouched. A line is terminated by `\n`; one trailing `\r` is
//! dropped, and a final line without a terminator is still yielded.

use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::{FILE_READ_BUFFER_SIZE, LINE_BUFFER_CAPACITY};
use crate::errors::MaskatError;

/// Opens the input source: the given file, or stdin when `path` is `None`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::with_capacity(FILE_READ_BUFFER_SIZE, file)))
        }
        None => {
            debug!("Reading input from stdin.");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Strips one `\n` and then one `\r` from the end of `line`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Calls `f` once per line of `reader` and returns the number of lines seen.
///
/// The line buffer starts at `LINE_BUFFER_CAPACITY` and grows as needed, so
/// long lines are never truncated.
pub fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<usize, MaskatError>
where
    R: BufRead,
    F: FnMut(&[u8]) -> Result<(), MaskatError>,
{
    let mut buf = Vec::with_capacity(LINE_BUFFER_CAPACITY);
    let mut lines = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(MaskatError::InputRead)?;
        if read == 0 {
            break;
        }
        lines += 1;
        f(trim_line_ending(&buf))?;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_lines(input: &[u8]) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        for_each_line(Cursor::new(input), |line| {
            out.push(line.to_vec());
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\r"), b"abc");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
        assert_eq!(trim_line_ending(b"abc\n\n"), b"abc\n");
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(collect_lines(b"one\ntwo"), vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn test_trailing_newline_adds_no_empty_line() {
        assert_eq!(collect_lines(b"one\n"), vec![b"one".to_vec()]);
        assert!(collect_lines(b"").is_empty());
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(collect_lines(b"\n\nx\n"), vec![b"".to_vec(), b"".to_vec(), b"x".to_vec()]);
    }

    #[test]
    fn test_callback_error_stops_iteration() {
        let mut seen = 0;
        let result = for_each_line(Cursor::new(b"a\nb\nc\n"), |_| {
            seen += 1;
            Err(MaskatError::OutputWrite(io::Error::from(io::ErrorKind::BrokenPipe)))
        });
        assert!(result.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let err = open_input(Some(Path::new("/definitely/not/here.log"))).err().unwrap();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
