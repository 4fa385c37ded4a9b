//! Geofence math for waypoint checks.
//!
//! Coordinates are planetary latitude/longitude in degrees. Race tolerances
//! are fractions of a degree on a single planet surface, so planar distance
//! over the raw degree values is sufficient; there is no great-circle or
//! longitude-wrap handling.

/// Planar distance between two (lat, lng) coordinates, in degrees.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dlat = a.0 - b.0;
    let dlng = a.1 - b.1;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Whether `point` lies inside the tolerance circle around `center`.
///
/// The boundary is exclusive: a point at exactly `range` degrees does not
/// count as inside.
pub fn within_range(center: (f64, f64), point: (f64, f64), range: f64) -> bool {
    distance(center, point) < range
}
