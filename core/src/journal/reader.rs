//! Incremental line reader for a single journal file.
//!
//! The journal grows while we read it, so a poll may observe a partial final
//! line; decoding failures are skipped, not fatal. Position is carried across
//! polls by the [`ReadCursor`] as a consumed-line count — a fresh iterator is
//! built per poll and fast-forwarded past the already-consumed lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::JournalError;
use crate::journal::cursor::ReadCursor;
use crate::journal::record::JournalRecord;

/// Bounded record iterator over a line-oriented reader.
///
/// Produces decoded records until EOF or the first I/O error, skipping lines
/// that fail to decode while still counting them. `line_no` always reflects
/// the total number of lines consumed so far, which is what the cursor needs.
pub struct RecordLines<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: u64,
    failed: bool,
}

impl<R: BufRead> RecordLines<R> {
    pub fn new(reader: R) -> Self {
        RecordLines {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }

    /// Total lines consumed, including skipped and malformed ones.
    pub fn line_no(&self) -> u64 {
        self.line_no
    }

    /// Consume and discard `count` lines (already read in an earlier poll).
    fn skip_lines(&mut self, count: u64) -> std::io::Result<()> {
        for _ in 0..count {
            match self.lines.next() {
                Some(Ok(_)) => self.line_no += 1,
                Some(Err(e)) => return Err(e),
                // File shorter than the cursor claims: a shrink/rewrite.
                // Behavior is undefined per the contract; we just stop.
                None => break,
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = std::io::Result<JournalRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };
            self.line_no += 1;
            match JournalRecord::parse(&line) {
                Some(record) => return Some(Ok(record)),
                None => {
                    // Partial write or junk line; position still advances
                    tracing::trace!(line = self.line_no, "skipping undecodable journal line");
                }
            }
        }
    }
}

/// Read every record appended to `path` since `cursor`.
///
/// Returns the records in line order together with the advanced cursor. The
/// input cursor is untouched; the caller commits the returned one only after
/// it has processed the records, so a failed poll never moves the position.
pub fn read_new_records(
    path: &Path,
    cursor: &ReadCursor,
) -> Result<(Vec<JournalRecord>, ReadCursor), JournalError> {
    let file = File::open(path).map_err(|e| JournalError::io(path, e))?;
    let mut lines = RecordLines::new(BufReader::new(file));
    lines
        .skip_lines(cursor.line)
        .map_err(|e| JournalError::io(path, e))?;

    let mut records = Vec::new();
    for record in &mut lines {
        records.push(record.map_err(|e| JournalError::io(path, e))?);
    }

    Ok((records, cursor.advanced_to(lines.line_no())))
}
