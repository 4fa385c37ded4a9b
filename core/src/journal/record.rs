//! Decoded journal records and the events extracted from them.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::error::JournalError;

/// The journal's fixed timestamp format (ISO-8601, second precision, UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse an event timestamp string.
///
/// The format is fixed; a mismatch means the game changed its output and is
/// fatal for the poll rather than silently skipped.
pub fn parse_event_timestamp(value: &str) -> Result<NaiveDateTime, JournalError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        JournalError::Timestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// One decoded journal line: a JSON object with a string `event` field.
///
/// Ephemeral — records exist only within a single poll's processing.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalRecord {
    fields: Map<String, Value>,
}

impl JournalRecord {
    /// Decode a raw journal line.
    ///
    /// Anything that is not a JSON object carrying a string `event` field is
    /// rejected; the reader treats that as a partial write and skips the
    /// line. No further schema validation happens here.
    pub fn parse(line: &str) -> Option<JournalRecord> {
        let fields: Map<String, Value> = serde_json::from_str(line).ok()?;
        if !fields.get("event").is_some_and(Value::is_string) {
            return None;
        }
        Some(JournalRecord { fields })
    }

    /// The record's event name.
    pub fn event(&self) -> &str {
        // Guaranteed by `parse`
        self.fields
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The raw `timestamp` field, if present.
    pub fn raw_timestamp(&self) -> Option<&str> {
        self.fields.get("timestamp").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// A record that passed the watch-set filter, with its timestamp normalized.
///
/// Buffered in file-then-line order for one poll and replaced wholesale by
/// the next poll.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedEvent {
    /// Event name (the `event` field)
    pub name: String,

    /// Parsed `timestamp` field, when the record carried one
    pub timestamp: Option<NaiveDateTime>,

    /// All remaining decoded fields of the record
    pub fields: Map<String, Value>,
}
