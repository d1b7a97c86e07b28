//! Map view document handed to the renderer.

use serde::Serialize;

use super::viewport::{initial_viewport, Viewport};
use crate::color::{ColoredTable, Rgba};

/// Point radius in meters when none is configured
pub const DEFAULT_POINT_RADIUS: u32 = 3000;
pub const MIN_POINT_RADIUS: u32 = 200;
pub const MAX_POINT_RADIUS: u32 = 80_000;

/// Tooltip template understood by the renderer
pub const TOOLTIP_TEMPLATE: &str = "Lat: {latitude}\nLon: {longitude}";

/// A single scatter point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// `[longitude, latitude]`, x before y
    pub position: [f64; 2],
    pub fill_color: Rgba,
}

/// Points plus the settings needed to draw them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub points: Vec<MapPoint>,
    pub radius_meters: u32,
    pub viewport: Viewport,
    pub tooltip: String,
}

impl MapView {
    pub fn from_colored(colored: &ColoredTable, radius_meters: u32) -> Self {
        let points = colored
            .rows()
            .map(|(record, fill_color)| MapPoint {
                latitude: record.latitude,
                longitude: record.longitude,
                position: [record.longitude, record.latitude],
                fill_color,
            })
            .collect();

        Self {
            points,
            radius_meters,
            viewport: initial_viewport(colored.table()),
            tooltip: TOOLTIP_TEMPLATE.to_string(),
        }
    }
}
