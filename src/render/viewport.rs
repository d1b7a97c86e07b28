//! Initial map viewport policy.

use serde::{Deserialize, Serialize};

use crate::table::CoordinateTable;

/// Center used when there is nothing to show (continental United States)
pub const DEFAULT_CENTER: (f64, f64) = (39.5, -98.35);
pub const DEFAULT_ZOOM: f64 = 3.0;
pub const SINGLE_POINT_ZOOM: f64 = 8.0;
pub const MULTI_POINT_ZOOM: f64 = 4.0;

/// Initial camera position of the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

impl Viewport {
    fn centered(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
            bearing: 0.0,
            pitch: 0.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::centered(DEFAULT_CENTER.0, DEFAULT_CENTER.1, DEFAULT_ZOOM)
    }
}

/// Center on the mean coordinate; zoom closer for a single point
pub fn initial_viewport(table: &CoordinateTable) -> Viewport {
    if table.is_empty() {
        return Viewport::default();
    }

    let count = table.len() as f64;
    let (lat_sum, lon_sum) = table
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));

    let zoom = if table.len() > 1 {
        MULTI_POINT_ZOOM
    } else {
        SINGLE_POINT_ZOOM
    };

    Viewport::centered(lat_sum / count, lon_sum / count, zoom)
}
