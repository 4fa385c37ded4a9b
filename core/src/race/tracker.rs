//! Waypoint progress state machine.
//!
//! Waypoints are satisfied strictly in order. Each update tick examines only
//! the immediate next waypoint: first against the events buffered by the most
//! recent poll, then against the live position. At most one waypoint advances
//! per tick, and a filled slot is never cleared or overwritten.

use chrono::NaiveDateTime;
use edrace_types::{RaceDefinition, Waypoint};

use crate::geo;
use crate::journal::record::WatchedEvent;

/// Tracks a single run through a race's waypoints.
#[derive(Debug, Clone)]
pub struct RaceTracker {
    race: RaceDefinition,

    /// One slot per waypoint; `Some` holds the time it was first satisfied
    progress: Vec<Option<NaiveDateTime>>,

    /// Index of the first unsatisfied waypoint; terminal at waypoint count
    next_unsatisfied: usize,
}

impl RaceTracker {
    pub fn new(race: RaceDefinition) -> Self {
        let slots = race.waypoints.len();
        RaceTracker {
            race,
            progress: vec![None; slots],
            next_unsatisfied: 0,
        }
    }

    pub fn race(&self) -> &RaceDefinition {
        &self.race
    }

    /// Event names the journal watch-set needs for this race.
    pub fn watched_events(&self) -> impl Iterator<Item = &str> {
        self.race.waypoints.iter().map(|wp| wp.event.as_str())
    }

    /// Satisfaction time per waypoint, in waypoint order.
    pub fn progress(&self) -> &[Option<NaiveDateTime>] {
        &self.progress
    }

    /// The waypoint the race is currently heading for, if any remain.
    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.race.waypoints.get(self.next_unsatisfied)
    }

    pub fn next_unsatisfied(&self) -> usize {
        self.next_unsatisfied
    }

    pub fn is_complete(&self) -> bool {
        self.next_unsatisfied == self.race.waypoints.len()
    }

    /// Evaluate one tick.
    ///
    /// `events` is the most recent poll's buffer, `position` the live
    /// (lat, lng) sample if one exists this tick, and `now` the tick's clock
    /// (used for geofence hits and for events that carried no timestamp).
    ///
    /// Returns the index of the waypoint satisfied this tick, if any. A
    /// position near a future waypoint never advances anything — only the
    /// immediate next waypoint is checked.
    pub fn update(
        &mut self,
        events: &[WatchedEvent],
        position: Option<(f64, f64)>,
        now: NaiveDateTime,
    ) -> Option<usize> {
        let index = self.next_unsatisfied;
        let wp = self.race.waypoints.get(index)?;

        let by_event = events
            .iter()
            .find(|event| event.name == wp.event)
            .map(|event| event.timestamp.unwrap_or(now));

        let satisfied_at = by_event.or_else(|| {
            position
                .filter(|&pos| geo::within_range((wp.lat, wp.lng), pos, wp.range))
                .map(|_| now)
        });

        let at = satisfied_at?;
        self.progress[index] = Some(at);
        self.next_unsatisfied += 1;
        tracing::info!(
            waypoint = index,
            event = %wp.event,
            at = %at,
            "waypoint satisfied"
        );
        Some(index)
    }
}
