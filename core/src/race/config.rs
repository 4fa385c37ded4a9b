//! Race definition loading.
//!
//! Races live as TOML files in a races directory, one race per file:
//!
//! ```toml
//! name = "Canyon Run"
//!
//! [[waypoint]]
//! event = "LaunchFighter"
//! lat = 0.0
//! lng = 0.0
//! range = 0.1
//! ```
//!
//! Selection is by race name first, file stem as a fallback.

use std::path::{Path, PathBuf};

use edrace_types::RaceDefinition;
use thiserror::Error;

/// Errors loading a single race file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a single race definition file.
pub fn load_race_file(path: &Path) -> Result<RaceDefinition, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut race: RaceDefinition = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    // An unnamed race is addressable by its file stem
    if race.name.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            race.name = stem.to_string();
        }
    }

    Ok(race)
}

/// Load every race definition in a directory, sorted by name.
///
/// Files that fail to load are skipped with a warning so one bad file does
/// not hide the rest. A missing directory is an empty list.
pub fn load_race_dir(dir: &Path) -> Vec<RaceDefinition> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut races = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "toml") {
            continue;
        }
        match load_race_file(&path) {
            Ok(race) => races.push(race),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable race file");
            }
        }
    }

    races.sort_by(|a, b| a.name.cmp(&b.name));
    races
}

/// Select a race by name from a races directory.
///
/// Matches the race's `name` field exactly, then the file stem of any TOML
/// file in the directory.
pub fn select_race(dir: &Path, name: &str) -> Option<RaceDefinition> {
    let races = load_race_dir(dir);
    if let Some(race) = races.iter().find(|r| r.name == name) {
        return Some(race.clone());
    }

    let by_stem = dir.join(format!("{name}.toml"));
    if by_stem.is_file() {
        return load_race_file(&by_stem).ok();
    }

    None
}

/// Default races directory under the user's config dir.
pub fn default_race_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("edrace").join("races"))
}
