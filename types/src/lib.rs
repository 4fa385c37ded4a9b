//! Shared configuration types for edrace.
//!
//! These types cross the core/CLI boundary and are (de)serialized from user
//! config: race definition files and the persisted application settings.
//! Keep this crate dependency-light — serde only.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// A single race checkpoint.
///
/// A waypoint is satisfied either by a journal event named `event` arriving,
/// or by the live position coming within `range` of (`lat`, `lng`).
/// Coordinates and range are planetary latitude/longitude degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Journal event name that satisfies this waypoint (e.g. "LaunchFighter")
    pub event: String,

    /// Latitude of the checkpoint, degrees
    pub lat: f64,

    /// Longitude of the checkpoint, degrees
    pub lng: f64,

    /// Tolerance radius around the checkpoint, degrees
    #[serde(default = "default_range")]
    pub range: f64,
}

fn default_range() -> f64 {
    0.1
}

/// A race: a named, ordered sequence of waypoints.
///
/// Loaded wholesale from a TOML file and immutable once selected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RaceDefinition {
    /// Display name, also used for selection; empty when the file omits it,
    /// in which case the loader substitutes the file stem
    #[serde(default)]
    pub name: String,

    /// Checkpoints in the order they must be satisfied
    #[serde(default, rename = "waypoint")]
    pub waypoints: Vec<Waypoint>,
}

impl RaceDefinition {
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }
}

/// Persisted application settings.
///
/// Empty strings mean "unset"; the core resolves platform defaults at load
/// time rather than baking paths into the config file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Directory containing Journal.*.log, NavRoute.json and Status.json
    #[serde(default)]
    pub journal_directory: String,

    /// Directory containing race definition TOML files
    #[serde(default)]
    pub race_directory: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_race_toml() {
        let toml = r#"
name = "Canyon Run"

[[waypoint]]
event = "LaunchFighter"
lat = 0.0
lng = 0.0
range = 0.1

[[waypoint]]
event = "Pass"
lat = 0.0
lng = 1.0
"#;

        let race: RaceDefinition = toml::from_str(toml).unwrap();
        assert_eq!(race.name, "Canyon Run");
        assert_eq!(race.waypoints.len(), 2);
        assert_eq!(race.waypoints[0].event, "LaunchFighter");
        // range falls back to the default tolerance when omitted
        assert_eq!(race.waypoints[1].range, 0.1);
    }

    #[test]
    fn test_race_without_name_deserializes_empty() {
        let toml = r#"
[[waypoint]]
event = "Touchdown"
lat = 0.0
lng = 0.0
"#;

        let race: RaceDefinition = toml::from_str(toml).unwrap();
        assert!(race.name.is_empty());
        assert_eq!(race.waypoints.len(), 1);
    }

    #[test]
    fn test_settings_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.journal_directory.is_empty());
        assert!(settings.race_directory.is_empty());
    }
}
