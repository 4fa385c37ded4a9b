//! Error taxonomy for the journal engine.
//!
//! Only genuinely fatal conditions become errors. A single malformed journal
//! line is skipped by the reader, and an absent file (journal directory,
//! NavRoute.json, Status.json) is an empty/`None` result, not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by journal polling and queries.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Filesystem failure while scanning or reading a journal file.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An event carried a `timestamp` field that does not match the journal's
    /// fixed `%Y-%m-%dT%H:%M:%SZ` format. This signals an upstream format
    /// change the engine cannot safely ignore.
    #[error("unexpected event timestamp format {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// NavRoute.json exists but could not be decoded.
    #[error("malformed route file {path}: {source}")]
    Route {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl JournalError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
