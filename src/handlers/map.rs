//! Map endpoint handlers.
//!
//! `POST /map` normalizes and colors an uploaded CSV and returns the map view.
//! `GET /map` returns the view of the dataset loaded at startup.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, rejected_query, UploadQuery};
use crate::error::Result;
use crate::logging::{generate_request_id, log_request_error};
use crate::pipeline::render_map;
use crate::render::MapView;
use crate::state::AppState;

/// Handle POST /map requests
pub async fn post_map_handler(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<UploadQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let request_id = generate_request_id();
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return rejected_query(rejection, "/map", &request_id),
    };
    let start_time = Instant::now();

    debug!(
        endpoint = "/map",
        request_id = %request_id,
        body_bytes = body.len(),
        header = ?params.header,
        strategy = ?params.strategy,
        "Processing map upload"
    );

    match build_uploaded_view(&state, &params, &body) {
        Ok(view) => {
            info!(
                endpoint = "/map",
                request_id = %request_id,
                points = view.points.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Map upload successful"
            );
            Json(view).into_response()
        }
        Err(error) => {
            log_request_error(
                &error,
                "/map",
                &request_id,
                Some(&format!("{:?}", params)),
            );
            error_response(&error, &request_id)
        }
    }
}

/// Handle GET /map requests
pub async fn get_map_handler(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<UploadQuery>, QueryRejection>,
) -> Response {
    let request_id = generate_request_id();
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return rejected_query(rejection, "/map", &request_id),
    };

    match build_dataset_view(&state, &params) {
        Ok(view) => {
            debug!(
                endpoint = "/map",
                request_id = %request_id,
                points = view.points.len(),
                "Serving preloaded dataset"
            );
            Json(view).into_response()
        }
        Err(error) => {
            log_request_error(&error, "/map", &request_id, None);
            error_response(&error, &request_id)
        }
    }
}

fn build_uploaded_view(state: &AppState, params: &UploadQuery, body: &[u8]) -> Result<MapView> {
    let options = params.pipeline_options(state)?;
    let radius = params.radius(state)?;
    render_map(body, &options, radius)
}

fn build_dataset_view(state: &AppState, params: &UploadQuery) -> Result<MapView> {
    let dataset = state.dataset_checked()?;
    let radius = params.radius(state)?;
    Ok(MapView::from_colored(&dataset.table, radius))
}
