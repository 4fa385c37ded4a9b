//! Tests for the waypoint progress state machine.
//!
//! The end-to-end fighter scenario mirrors a real race: launch event, a
//! geofenced gate, dock event.

use chrono::NaiveDateTime;
use edrace_types::{RaceDefinition, Waypoint};
use serde_json::Map;

use super::tracker::RaceTracker;
use crate::journal::record::WatchedEvent;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn waypoint(event: &str, lat: f64, lng: f64, range: f64) -> Waypoint {
    Waypoint {
        event: event.to_string(),
        lat,
        lng,
        range,
    }
}

fn fighter_race() -> RaceDefinition {
    RaceDefinition {
        name: "Fighter Test".to_string(),
        waypoints: vec![
            waypoint("LaunchFighter", 0.0, 0.0, 0.1),
            waypoint("Pass", 0.0, 1.0, 0.1),
            waypoint("DockFighter", 0.0, 0.0, 0.1),
        ],
    }
}

fn event(name: &str, timestamp: Option<NaiveDateTime>) -> WatchedEvent {
    WatchedEvent {
        name: name.to_string(),
        timestamp,
        fields: Map::new(),
    }
}

#[test]
fn test_fighter_race_end_to_end() {
    let mut tracker = RaceTracker::new(fighter_race());
    let time_start = at(1, 0, 0);
    let time_w1 = at(1, 0, 30);
    let time_end = at(1, 1, 0);

    assert_eq!(tracker.progress(), &[None, None, None]);

    // Launch event satisfies waypoint 0 with the event's own timestamp
    let advanced = tracker.update(
        &[event("LaunchFighter", Some(time_start))],
        Some((0.0, 0.0)),
        time_start,
    );
    assert_eq!(advanced, Some(0));
    assert_eq!(tracker.progress(), &[Some(time_start), None, None]);

    // Passing the gate satisfies waypoint 1 by geofence at the tick's clock
    let advanced = tracker.update(&[], Some((0.0, 1.0)), time_w1);
    assert_eq!(advanced, Some(1));
    assert_eq!(tracker.progress(), &[Some(time_start), Some(time_w1), None]);

    // Out of tolerance of waypoint 2: nothing moves
    let advanced = tracker.update(&[], Some((0.0, -0.1)), time_w1);
    assert_eq!(advanced, None);
    assert_eq!(tracker.progress(), &[Some(time_start), Some(time_w1), None]);

    // Dock event finishes the race
    let advanced = tracker.update(
        &[event("DockFighter", Some(time_end))],
        Some((0.0, 0.0)),
        time_end,
    );
    assert_eq!(advanced, Some(2));
    assert_eq!(
        tracker.progress(),
        &[Some(time_start), Some(time_w1), Some(time_end)]
    );
    assert!(tracker.is_complete());
}

#[test]
fn test_slots_fill_strictly_in_order() {
    let mut tracker = RaceTracker::new(fighter_race());

    // The dock event belongs to waypoint 2; with waypoint 0 unsatisfied it
    // must not fill anything
    tracker.update(&[event("DockFighter", Some(at(1, 0, 0)))], None, at(1, 0, 0));
    assert_eq!(tracker.progress(), &[None, None, None]);
    assert_eq!(tracker.next_unsatisfied(), 0);
}

#[test]
fn test_future_waypoint_proximity_is_ignored() {
    let mut tracker = RaceTracker::new(fighter_race());

    // Inside waypoint 1's circle while waypoint 0 is still pending
    let advanced = tracker.update(&[], Some((0.0, 1.0)), at(1, 0, 0));
    assert_eq!(advanced, None);
    assert_eq!(tracker.progress(), &[None, None, None]);
}

#[test]
fn test_position_at_exact_radius_does_not_trigger() {
    let mut tracker = RaceTracker::new(RaceDefinition {
        name: "Edge".to_string(),
        waypoints: vec![waypoint("Gate", 0.0, 0.0, 0.1)],
    });
    assert_eq!(tracker.update(&[], Some((0.0, 0.1)), at(1, 0, 0)), None);
    assert_eq!(
        tracker.update(&[], Some((0.0, 0.05)), at(1, 0, 1)),
        Some(0)
    );
}

#[test]
fn test_missing_position_is_not_fatal() {
    let mut tracker = RaceTracker::new(fighter_race());
    assert_eq!(tracker.update(&[], None, at(1, 0, 0)), None);
    assert_eq!(tracker.progress(), &[None, None, None]);
}

#[test]
fn test_event_without_timestamp_uses_tick_clock() {
    let mut tracker = RaceTracker::new(fighter_race());
    let now = at(1, 2, 3);
    tracker.update(&[event("LaunchFighter", None)], None, now);
    assert_eq!(tracker.progress()[0], Some(now));
}

#[test]
fn test_at_most_one_waypoint_per_tick() {
    let mut tracker = RaceTracker::new(fighter_race());
    let now = at(1, 0, 0);

    // Both ends' events in one buffer: only the current waypoint advances
    tracker.update(
        &[
            event("LaunchFighter", Some(now)),
            event("DockFighter", Some(now)),
        ],
        None,
        now,
    );
    assert_eq!(tracker.next_unsatisfied(), 1);
    assert_eq!(tracker.progress()[2], None);
}

#[test]
fn test_filled_slot_is_never_overwritten() {
    let mut tracker = RaceTracker::new(fighter_race());
    let first = at(1, 0, 0);
    tracker.update(&[event("LaunchFighter", Some(first))], None, first);

    // A repeat launch event matches no pending waypoint and changes nothing
    let later = at(1, 5, 0);
    tracker.update(&[event("LaunchFighter", Some(later))], None, later);
    assert_eq!(tracker.progress()[0], Some(first));
}

#[test]
fn test_terminal_tracker_is_a_no_op() {
    let mut tracker = RaceTracker::new(RaceDefinition {
        name: "Single".to_string(),
        waypoints: vec![waypoint("Gate", 0.0, 0.0, 0.1)],
    });
    tracker.update(&[event("Gate", Some(at(1, 0, 0)))], None, at(1, 0, 0));
    assert!(tracker.is_complete());

    assert_eq!(
        tracker.update(&[event("Gate", Some(at(1, 1, 0)))], Some((0.0, 0.0)), at(1, 1, 0)),
        None
    );
    assert!(tracker.current_waypoint().is_none());
}

#[test]
fn test_watched_events_cover_every_waypoint() {
    let tracker = RaceTracker::new(fighter_race());
    let watched: Vec<&str> = tracker.watched_events().collect();
    assert_eq!(watched, vec!["LaunchFighter", "Pass", "DockFighter"]);
}
