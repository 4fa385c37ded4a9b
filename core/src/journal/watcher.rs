//! The poll-driven journal watcher.
//!
//! One watcher instance owns the read cursor, the modification-time
//! watermark and the per-poll event buffer; it is single-threaded and driven
//! entirely by the host loop calling [`JournalWatcher::poll`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::JournalError;
use crate::journal::cursor::ReadCursor;
use crate::journal::record::WatchedEvent;
use crate::journal::route::RouteEntry;
use crate::journal::status::StatusSnapshot;
use crate::journal::{files, filter, reader, route, status};

/// Tails the active journal file set and buffers watched events per poll.
#[derive(Debug, Default)]
pub struct JournalWatcher {
    directory: PathBuf,

    /// Event names to buffer; consulted live on every poll, so the host may
    /// mutate it between polls
    pub watch: HashSet<String>,

    cursor: ReadCursor,

    /// Single watermark shared across all active files. Re-scanning one file
    /// advances it before the next file is compared — a known quirk kept for
    /// observable compatibility, not a per-file watermark.
    watermark: Option<SystemTime>,

    events: Vec<WatchedEvent>,
}

impl JournalWatcher {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        JournalWatcher {
            directory: directory.into(),
            ..Default::default()
        }
    }

    pub fn with_watch<I, S>(directory: impl Into<PathBuf>, watch: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut watcher = Self::new(directory);
        watcher.watch = watch.into_iter().map(Into::into).collect();
        watcher
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Events buffered by the most recent poll, in file-then-line order.
    ///
    /// The buffer is replaced on every poll; consume it before polling again.
    pub fn events(&self) -> &[WatchedEvent] {
        &self.events
    }

    /// Current read position (for inspection; the watcher owns mutation).
    pub fn cursor(&self) -> &ReadCursor {
        &self.cursor
    }

    /// Poll the journal directory for appended records.
    ///
    /// Clears the previous event buffer, then re-scans every active file
    /// whose mtime is strictly newer than the watermark, filtering new
    /// records into the buffer. Returns whether anything changed. With no
    /// active files at all this is `Ok(false)` and no state moves.
    ///
    /// Cursor and watermark advance only after a file's records were read
    /// and classified successfully, so a failed poll leaves the position
    /// where it was.
    pub fn poll(&mut self) -> Result<bool, JournalError> {
        self.events.clear();

        let active = files::locate_active_files(&self.directory)?;
        let mut changed = false;

        for filename in active {
            let path = self.directory.join(&filename);
            let mtime = std::fs::metadata(&path)
                .and_then(|m| m.modified())
                .map_err(|e| JournalError::io(&path, e))?;

            if self.watermark.is_some_and(|mark| mtime <= mark) {
                continue;
            }

            self.scan_file(&filename, &path)?;
            self.watermark = Some(mtime);
            changed = true;
        }

        if changed {
            tracing::debug!(
                events = self.events.len(),
                cursor = ?self.cursor,
                "journal poll picked up changes"
            );
        }
        Ok(changed)
    }

    fn scan_file(&mut self, filename: &str, path: &Path) -> Result<(), JournalError> {
        let cursor = self.cursor.for_file(filename);
        let (records, next) = reader::read_new_records(path, &cursor)?;

        for record in records {
            if let Some(event) = filter::classify(record, &self.watch)? {
                self.events.push(event);
            }
        }

        self.cursor = next;
        Ok(())
    }

    /// The current plotted route, if `NavRoute.json` exists.
    ///
    /// `None` when the file is absent; an empty vec when it exists but holds
    /// no `Route` — the two cases are deliberately distinguishable.
    pub fn nav_route(&self) -> Result<Option<Vec<RouteEntry>>, JournalError> {
        route::nav_route(&self.directory)
    }

    /// The latest position snapshot from `Status.json`, if readable.
    pub fn status(&self) -> Option<StatusSnapshot> {
        status::read_status(&self.directory)
    }
}
