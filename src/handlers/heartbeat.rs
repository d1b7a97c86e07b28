//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and a summary of the
//! preloaded dataset.

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::render::{initial_viewport, Viewport};
use crate::state::{AppState, Dataset};

/// Unique per process
static SERVER_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: Lazy<SystemTime> = Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Preloaded dataset, if any
    pub dataset: Option<DatasetInfo>,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Serialize)]
pub struct DatasetInfo {
    pub source: String,
    pub row_count: usize,
    /// Rows whose color came from the input (or the random strategy)
    pub colored_rows: usize,
    pub has_color_column: bool,
    pub viewport: Viewport,
}

impl From<&Dataset> for DatasetInfo {
    fn from(dataset: &Dataset) -> Self {
        let table = dataset.table.table();
        Self {
            source: dataset.source.clone(),
            row_count: table.len(),
            colored_rows: table.colored_count(),
            has_color_column: table.has_color_column(),
            viewport: initial_viewport(table),
        }
    }
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: state.dataset.as_ref().map(DatasetInfo::from),
        status: "healthy".to_string(),
    })
}
