//! Race definitions and waypoint progress tracking.

pub mod config;
pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use config::{ConfigError, load_race_dir, load_race_file, select_race};
pub use tracker::RaceTracker;
