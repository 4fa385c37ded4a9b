//! Read position tracking across polls and file rotations.

/// Where the last poll stopped reading.
///
/// The cursor is a plain value: reads take one in and hand a new one back,
/// and the watcher commits the new value only after a file's records were
/// processed successfully. `line` counts consumed lines (well-formed or not)
/// within `filename` and is monotonically non-decreasing until the filename
/// changes, at which point it resets to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadCursor {
    /// Filename the cursor is positioned in, empty before the first read
    pub filename: String,

    /// Number of lines already consumed from that file
    pub line: u64,
}

impl ReadCursor {
    /// Position the cursor for a read of `filename`.
    ///
    /// Staying on the same file keeps the line offset; switching files (a
    /// rotation) starts from line zero. A rotated-away file is therefore
    /// re-read from the top if it ever grows again, which the append-only
    /// rotation scheme rules out in practice.
    pub fn for_file(&self, filename: &str) -> ReadCursor {
        if self.filename == filename {
            self.clone()
        } else {
            ReadCursor {
                filename: filename.to_string(),
                line: 0,
            }
        }
    }

    /// The cursor after consuming `line` total lines of the current file.
    pub fn advanced_to(&self, line: u64) -> ReadCursor {
        debug_assert!(line >= self.line);
        ReadCursor {
            filename: self.filename.clone(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_file_keeps_offset() {
        let cursor = ReadCursor {
            filename: "Journal.100.01.log".into(),
            line: 42,
        };
        assert_eq!(cursor.for_file("Journal.100.01.log"), cursor);
    }

    #[test]
    fn test_rotation_resets_offset() {
        let cursor = ReadCursor {
            filename: "Journal.100.01.log".into(),
            line: 42,
        };
        let next = cursor.for_file("Journal.100.02.log");
        assert_eq!(next.filename, "Journal.100.02.log");
        assert_eq!(next.line, 0);
    }

    #[test]
    fn test_advanced_to_is_a_new_value() {
        let cursor = ReadCursor {
            filename: "Journal.100.01.log".into(),
            line: 3,
        };
        let next = cursor.advanced_to(7);
        assert_eq!(cursor.line, 3);
        assert_eq!(next.line, 7);
        assert_eq!(next.filename, cursor.filename);
    }
}
