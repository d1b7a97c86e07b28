//! CSV export handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::{error_response, rejected_query, UploadQuery};
use crate::error::Result;
use crate::export::export_csv_string;
use crate::logging::{generate_request_id, log_request_error};
use crate::pipeline::process;
use crate::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const CSV_DISPOSITION: &str = "attachment; filename=\"points.csv\"";

/// Handle POST /export requests: normalize an upload and return it as CSV
pub async fn post_export_handler(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<UploadQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let request_id = generate_request_id();
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return rejected_query(rejection, "/export", &request_id),
    };
    let start_time = Instant::now();

    let result = params
        .pipeline_options(&state)
        .and_then(|options| process(&body, &options))
        .and_then(|colored| export_csv_string(colored.table()));

    match result {
        Ok(csv) => {
            info!(
                endpoint = "/export",
                request_id = %request_id,
                bytes = csv.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Export successful"
            );
            csv_response(csv)
        }
        Err(error) => {
            log_request_error(&error, "/export", &request_id, None);
            error_response(&error, &request_id)
        }
    }
}

/// Handle GET /export requests: the preloaded dataset as CSV
pub async fn get_export_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();

    match export_dataset(&state) {
        Ok(csv) => csv_response(csv),
        Err(error) => {
            log_request_error(&error, "/export", &request_id, None);
            error_response(&error, &request_id)
        }
    }
}

fn export_dataset(state: &AppState) -> Result<String> {
    let dataset = state.dataset_checked()?;
    export_csv_string(dataset.table.table())
}

fn csv_response(csv: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE)),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static(CSV_DISPOSITION),
            ),
        ],
        csv,
    )
        .into_response()
}
