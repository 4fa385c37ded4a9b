pub mod error;
pub mod geo;
pub mod journal;
pub mod race;
pub mod settings;

// Re-exports for convenience
pub use error::JournalError;
pub use journal::{JournalWatcher, ReadCursor, WatchedEvent};
pub use race::RaceTracker;
