//! HTTP request handlers for the warehouse-mapper API.
//!
//! This module contains the endpoint handlers and the router that wires them
//! together.

pub mod export;
pub mod heartbeat;
pub mod map;
pub mod palette;

pub use export::{get_export_handler, post_export_handler};
pub use heartbeat::heartbeat_handler;
pub use map::{get_map_handler, post_map_handler};
pub use palette::palette_handler;

use axum::{
    extract::{rejection::QueryRejection, DefaultBodyLimit},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::validate_point_radius;
use crate::error::{MapperError, Result};
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::pipeline::PipelineOptions;
use crate::state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .route("/heartbeat", get(heartbeat_handler))
        .route("/map", get(get_map_handler).post(post_map_handler))
        .route("/export", get(get_export_handler).post(post_export_handler))
        .route("/palette", get(palette_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Per-request overrides of the configured pipeline settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    /// Header handling (auto, present, absent)
    pub header: Option<String>,
    /// Color strategy (sweep, random)
    pub strategy: Option<String>,
    /// Alpha for swept colors
    pub alpha: Option<u8>,
    /// Point radius in meters
    pub radius: Option<u32>,
    /// Seed for the random strategy
    pub seed: Option<u64>,
}

impl UploadQuery {
    /// Merge the overrides over the configured defaults
    pub fn pipeline_options(&self, state: &AppState) -> Result<PipelineOptions> {
        let mut options = state.pipeline_options();
        if let Some(header) = &self.header {
            options.header_mode = header.parse()?;
        }
        if let Some(strategy) = &self.strategy {
            options.color_strategy = strategy.parse()?;
        }
        if let Some(alpha) = self.alpha {
            options.alpha = alpha;
        }
        if self.seed.is_some() {
            options.random_seed = self.seed;
        }
        Ok(options)
    }

    /// Requested point radius, or the configured one
    pub fn radius(&self, state: &AppState) -> Result<u32> {
        let radius = self.radius.unwrap_or(state.config.map.point_radius);
        validate_point_radius(radius)?;
        Ok(radius)
    }
}

/// HTTP status for an error
pub fn status_for(error: &MapperError) -> StatusCode {
    match error {
        MapperError::MalformedInput { .. }
        | MapperError::InvalidParameter { .. }
        | MapperError::Csv(_) => StatusCode::BAD_REQUEST,
        MapperError::DataNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Report an unparseable query string through the JSON error body
pub fn rejected_query(rejection: QueryRejection, endpoint: &str, request_id: &str) -> Response {
    let error = MapperError::InvalidParameter {
        param: "query".to_string(),
        message: rejection.body_text(),
    };
    log_request_error(&error, endpoint, request_id, None);
    error_response(&error, request_id)
}

/// JSON error body carrying the request id
pub fn error_response(error: &MapperError, request_id: &str) -> Response {
    (
        status_for(error),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
