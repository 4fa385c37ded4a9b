//! NavRoute.json query.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::JournalError;

/// One plotted jump in the current navigation route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteEntry {
    pub star_system: String,

    #[serde(default)]
    pub star_class: String,

    #[serde(default)]
    pub system_address: u64,

    /// Galactic position, light years
    #[serde(default)]
    pub star_pos: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct NavRouteFile {
    #[serde(rename = "Route")]
    route: Option<Vec<RouteEntry>>,
}

/// Read the plotted route from `NavRoute.json` in `dir`.
///
/// - file absent: `Ok(None)` — no route plotted yet
/// - file present without a `Route` key: `Ok(Some(vec![]))` — route cleared
/// - otherwise the decoded entries
///
/// An unreadable or undecodable file is fatal: the game wrote something this
/// engine does not understand.
pub fn nav_route(dir: &Path) -> Result<Option<Vec<RouteEntry>>, JournalError> {
    let path = dir.join("NavRoute.json");

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(JournalError::io(&path, e)),
    };

    let file: NavRouteFile =
        serde_json::from_str(&contents).map_err(|source| JournalError::Route {
            path: path.clone(),
            source,
        })?;

    Ok(Some(file.route.unwrap_or_default()))
}
