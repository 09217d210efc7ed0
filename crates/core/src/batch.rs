//! Listing decoder.
//!
//! Takes a whole listing and produces its disassembly:
//! 1. **Filter:** Each line is trimmed; anything that is not exactly 32
//!    characters is dropped without producing output.
//! 2. **Decode:** Remaining lines go through the line disassembler.
//! 3. **Order:** Output lines are collected in input order.
//!
//! A 32-character line that contains something other than `0`/`1` cannot be a
//! word either and is dropped the same way (with a warning). So is a line that
//! is not valid UTF-8; the words around it are still decoded.
//!
//! Lines end at `\n`, `\r\n`, or a lone `\r`.
//!
//! [`decode_file`] is the boundary-friendly form: a file that cannot be read
//! is reported through `tracing` and yields an empty result.
//! [`try_decode_file`] returns the error instead.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str;

use tracing::{error, info, trace, warn};

use crate::common::error::{BatchError, BatchResult};
use crate::isa::decode::decode;
use crate::isa::instruction::{InstructionWord, WORD_WIDTH};
use crate::stats::DecodeStats;

/// Disassembly of one listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutput {
    /// Output lines in input order.
    pub lines: Vec<String>,
    /// Line counters.
    pub stats: DecodeStats,
}

impl BatchOutput {
    /// Joins the output lines with `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Filters and decodes one line; `index` is zero-based.
    fn push_line(&mut self, index: usize, raw: &str) {
        self.stats.lines_read += 1;
        let line = raw.trim();

        let len = line.chars().count();
        if len != WORD_WIDTH {
            trace!(line = index + 1, len, "skipping non-word line");
            self.stats.skipped += 1;
            return;
        }

        let word: InstructionWord = match line.parse() {
            Ok(word) => word,
            Err(e) => {
                warn!(line = index + 1, "skipping malformed word: {e}");
                self.stats.skipped += 1;
                return;
            }
        };

        let decoded = decode(word);
        if decoded.is_invalid() {
            self.stats.invalid += 1;
        } else {
            self.stats.decoded += 1;
        }
        self.lines.push(decoded.to_string());
    }

    /// Counts a line that is not valid UTF-8 as skipped.
    fn skip_undecodable(&mut self, index: usize, err: str::Utf8Error) {
        self.stats.lines_read += 1;
        self.stats.skipped += 1;
        warn!(line = index + 1, "skipping line that is not UTF-8: {err}");
    }
}

/// Splits raw listing bytes into lines.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A terminator at the very end
/// does not start an extra empty line.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&bytes[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&bytes[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }
    lines
}

/// Decodes a sequence of listing lines.
///
/// # Arguments
///
/// * `lines` - Raw lines; surrounding whitespace is trimmed before the length check.
pub fn decode_lines<I, S>(lines: I) -> BatchOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BatchOutput::default();
    for (index, raw) in lines.into_iter().enumerate() {
        out.push_line(index, raw.as_ref());
    }
    out
}

/// Decodes a listing held as raw bytes.
///
/// Lines that are not valid UTF-8 are skipped and counted; they never fail the
/// whole listing.
pub fn decode_bytes(bytes: &[u8]) -> BatchOutput {
    let mut out = BatchOutput::default();
    for (index, raw) in split_lines(bytes).into_iter().enumerate() {
        match str::from_utf8(raw) {
            Ok(line) => out.push_line(index, line),
            Err(e) => out.skip_undecodable(index, e),
        }
    }
    out
}

/// Decodes a listing from any reader.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails. Bytes that are not
/// UTF-8 are not an error; see [`decode_bytes`].
pub fn decode_reader<R: Read>(mut reader: R) -> io::Result<BatchOutput> {
    let mut bytes = Vec::new();
    let _ = reader.read_to_end(&mut bytes)?;
    Ok(decode_bytes(&bytes))
}

/// Decodes a listing file.
///
/// # Errors
///
/// Returns [`BatchError::NotFound`] if the file does not exist and
/// [`BatchError::Read`] for any other failure to open or read it.
/// Undecodable lines inside a readable file are skipped, not reported here.
pub fn try_decode_file(path: impl AsRef<Path>) -> BatchResult<BatchOutput> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| BatchError::reading(path, e))?;
    let out = decode_bytes(&bytes);

    info!(
        path = %path.display(),
        lines = out.stats.lines_read,
        emitted = out.stats.emitted(),
        invalid = out.stats.invalid,
        "decoded listing"
    );
    Ok(out)
}

/// Decodes a listing file, containing any failure.
///
/// If the file cannot be read the error is logged and an empty result is
/// returned; the caller's batch carries on.
pub fn decode_file(path: impl AsRef<Path>) -> Vec<String> {
    match try_decode_file(path) {
        Ok(out) => out.lines,
        Err(e) => {
            error!("{e}");
            Vec::new()
        }
    }
}
