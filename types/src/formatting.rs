//! Display formatting for race progress.
//!
//! All time/coordinate display formatting goes through this module so the
//! CLI and any future overlay render splits identically.

/// Format a number of elapsed seconds as a race clock.
///
/// - Under an hour: `M:SS`
/// - An hour or more: `H:MM:SS`
/// - Negative inputs are clamped to zero
///
/// # Examples
/// ```
/// use edrace_types::formatting::format_clock;
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(90), "1:30");
/// assert_eq!(format_clock(3_725), "1:02:05");
/// assert_eq!(format_clock(-5), "0:00");
/// ```
pub fn format_clock(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format a latitude/longitude pair for display.
///
/// Four decimal places is enough to distinguish positions at typical race
/// tolerances (tenths of a degree).
///
/// # Examples
/// ```
/// use edrace_types::formatting::format_position;
/// assert_eq!(format_position(12.5, -3.25), "12.5000, -3.2500");
/// ```
pub fn format_position(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}

/// Format a waypoint slot for a progress listing: the split clock when the
/// slot is filled, a placeholder otherwise.
///
/// # Examples
/// ```
/// use edrace_types::formatting::format_split;
/// assert_eq!(format_split(Some(95)), "1:35");
/// assert_eq!(format_split(None), "--:--");
/// ```
pub fn format_split(elapsed_secs: Option<i64>) -> String {
    match elapsed_secs {
        Some(secs) => format_clock(secs),
        None => "--:--".to_string(),
    }
}
