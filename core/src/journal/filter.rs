//! Watch-set filtering and timestamp normalization.

use std::collections::HashSet;

use crate::error::JournalError;
use crate::journal::record::{JournalRecord, WatchedEvent, parse_event_timestamp};

/// Classify one record against the watch-set.
///
/// The timestamp is normalized for every record, watched or not, before the
/// watch check — a format mismatch is fatal regardless of whether anyone is
/// watching that event. Returns `Ok(None)` for records outside the watch-set;
/// with an empty watch-set nothing is ever buffered.
pub fn classify(
    record: JournalRecord,
    watch: &HashSet<String>,
) -> Result<Option<WatchedEvent>, JournalError> {
    let timestamp = record.raw_timestamp().map(parse_event_timestamp).transpose()?;

    if !watch.contains(record.event()) {
        return Ok(None);
    }

    let name = record.event().to_string();
    Ok(Some(WatchedEvent {
        name,
        timestamp,
        fields: record.into_fields(),
    }))
}
