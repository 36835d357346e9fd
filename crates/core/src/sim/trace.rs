//! Text trace reader.
//!
//! A trace is a sequence of whitespace-separated `label address` pairs. The
//! label is `0` for a read and `1` for a write (anything else is an unlabelled
//! access); the address is hexadecimal, with or without a `0x` prefix. Pairs
//! are read token by token, so line breaks carry no meaning.
//!
//! ```text
//! 0 7fffed80
//! 1 0x10010000
//! 0 10010060
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use super::{AccessKind, TraceRecord};
use crate::common::{SimError, TraceError};

/// Iterator over the records of a text trace.
///
/// Yields `Err` once for an I/O failure or a malformed record and then stops.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
    record: u64,
    done: bool,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path).map_err(TraceError::Io)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered source.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
            record: 0,
            done: false,
        }
    }

    /// Number of records started so far (1-based position of the last one).
    pub const fn records_read(&self) -> u64 {
        self.record
    }

    fn next_token(&mut self) -> Option<io::Result<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            match self.lines.next()? {
                Ok(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn fail(&mut self, err: TraceError) -> Result<TraceRecord, SimError> {
        self.done = true;
        Err(err.into())
    }
}

/// Parses a hexadecimal address with an optional `0x`/`0X` prefix.
pub fn parse_address(text: &str) -> Option<u64> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let label = match self.next_token()? {
            Ok(token) => token,
            Err(e) => return Some(self.fail(TraceError::Io(e))),
        };
        self.record += 1;

        let address = match self.next_token() {
            Some(Ok(token)) => token,
            Some(Err(e)) => return Some(self.fail(TraceError::Io(e))),
            None => {
                return Some(self.fail(TraceError::MalformedTraceRecord {
                    record: self.record,
                    text: label,
                    reason: "missing address",
                }));
            }
        };

        match parse_address(&address) {
            Some(addr) => Some(Ok(TraceRecord::new(AccessKind::from_label(&label), addr))),
            None => Some(self.fail(TraceError::MalformedTraceRecord {
                record: self.record,
                text: format!("{label} {address}"),
                reason: "invalid hexadecimal address",
            })),
        }
    }
}
