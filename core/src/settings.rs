//! Persisted application settings.

use std::path::PathBuf;

use edrace_types::Settings;

use crate::race::config::default_race_dir;

/// Load settings from the platform config location, falling back to defaults
/// when the file is absent or unreadable.
pub fn load() -> Settings {
    confy::load("edrace", None).unwrap_or_default()
}

/// The journal directory to use: explicit setting first, then the game's
/// default save location.
pub fn journal_dir(settings: &Settings) -> Option<PathBuf> {
    if !settings.journal_directory.is_empty() {
        return Some(PathBuf::from(&settings.journal_directory));
    }
    default_journal_dir()
}

/// The races directory to use: explicit setting first, then the config dir.
pub fn race_dir(settings: &Settings) -> Option<PathBuf> {
    if !settings.race_directory.is_empty() {
        return Some(PathBuf::from(&settings.race_directory));
    }
    default_race_dir()
}

/// Where the game writes journals when nothing is configured.
///
/// Only Windows has a well-known location ("Saved Games"); elsewhere the
/// directory must be configured or passed explicitly.
pub fn default_journal_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        dirs::home_dir().map(|home| {
            home.join("Saved Games")
                .join("Frontier Developments")
                .join("Elite Dangerous")
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directories_win() {
        let settings = Settings {
            journal_directory: "/tmp/journals".to_string(),
            race_directory: "/tmp/races".to_string(),
        };
        assert_eq!(journal_dir(&settings), Some(PathBuf::from("/tmp/journals")));
        assert_eq!(race_dir(&settings), Some(PathBuf::from("/tmp/races")));
    }

    #[test]
    fn test_unset_race_dir_falls_back_to_config_dir() {
        let settings = Settings::default();
        if let Some(dir) = race_dir(&settings) {
            assert!(dir.ends_with("edrace/races") || dir.ends_with("edrace\\races"));
        }
    }
}
