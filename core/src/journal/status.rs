//! Status.json position snapshot.
//!
//! The game rewrites this file in place many times a second, so a read can
//! catch it empty or half-written. That is transient by nature — the next
//! tick re-reads it — so nothing here is fatal.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::journal::record::TIMESTAMP_FORMAT;

/// A point-in-time position sample for the geofence check.
///
/// Coordinates are only present while near a planet surface; a snapshot
/// without them simply cannot satisfy a geofenced waypoint this tick.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default, rename = "Latitude")]
    pub latitude: Option<f64>,

    #[serde(default, rename = "Longitude")]
    pub longitude: Option<f64>,
}

impl StatusSnapshot {
    /// The (lat, lng) pair when both coordinates are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// The snapshot's own clock, when present and well-formed.
    ///
    /// Unlike journal events, a bad timestamp here is ignored — the caller
    /// falls back to wall time.
    pub fn time(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
    }
}

/// Read the current snapshot from `Status.json` in `dir`.
///
/// Absent or undecodable files yield `None`.
pub fn read_status(dir: &Path) -> Option<StatusSnapshot> {
    let path = dir.join("Status.json");
    let contents = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable status snapshot");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_status(dir.path()), None);
    }

    #[test]
    fn test_half_written_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Status.json"), r#"{"timestamp": "20"#).unwrap();
        assert_eq!(read_status(dir.path()), None);
    }

    #[test]
    fn test_snapshot_without_coordinates_has_no_position() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Status.json"),
            r#"{"timestamp":"2020-01-01T01:00:00Z","event":"Status","Flags":0}"#,
        )
        .unwrap();
        let snapshot = read_status(dir.path()).unwrap();
        assert_eq!(snapshot.position(), None);
        assert_eq!(snapshot.time().unwrap().to_string(), "2020-01-01 01:00:00");
    }

    #[test]
    fn test_snapshot_with_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Status.json"),
            r#"{"timestamp":"2020-01-01T01:00:00Z","Latitude":12.5,"Longitude":-3.25}"#,
        )
        .unwrap();
        let snapshot = read_status(dir.path()).unwrap();
        assert_eq!(snapshot.position(), Some((12.5, -3.25)));
    }

    #[test]
    fn test_bad_status_timestamp_is_ignored() {
        let snapshot = StatusSnapshot {
            timestamp: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(snapshot.time(), None);
    }
}
