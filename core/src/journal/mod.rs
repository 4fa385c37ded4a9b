//! Incremental journal tailing.
//!
//! The game appends JSON-lines records to `Journal.<session>.<sequence>.log`
//! files and rotates to a new file set each run. [`JournalWatcher`] polls the
//! active set, reads only lines appended since the last poll, and buffers the
//! events named in its watch-set. Side files (`NavRoute.json`, `Status.json`)
//! are read wholesale per query.

pub mod cursor;
pub mod files;
pub mod filter;
pub mod reader;
pub mod record;
pub mod route;
pub mod status;
pub mod watcher;

pub use cursor::ReadCursor;
pub use record::{JournalRecord, WatchedEvent};
pub use route::RouteEntry;
pub use status::StatusSnapshot;
pub use watcher::JournalWatcher;
