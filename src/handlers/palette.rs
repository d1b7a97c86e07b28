//! Palette endpoint handler.
//!
//! Returns `n` swept colors, useful for legends and for previewing a palette.

use axum::{
    extract::{rejection::QueryRejection, Query},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error_response, rejected_query};
use crate::color::{generate_palette, Rgba, DEFAULT_ALPHA};
use crate::error::{MapperError, Result};
use crate::logging::{generate_request_id, log_request_error};

/// Largest palette served in one request. Past
/// [`DISTINCT_PALETTE_LIMIT`](crate::color::DISTINCT_PALETTE_LIMIT) colors
/// the palette may repeat.
pub const MAX_PALETTE_SIZE: usize = 10_000;

/// Query parameters for the palette endpoint
#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    /// Number of colors
    pub n: usize,
    /// Alpha channel
    pub alpha: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub count: usize,
    pub alpha: u8,
    pub colors: Vec<Rgba>,
    pub hex: Vec<String>,
}

/// Handle GET /palette requests
pub async fn palette_handler(
    query: std::result::Result<Query<PaletteQuery>, QueryRejection>,
) -> Response {
    let request_id = generate_request_id();
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return rejected_query(rejection, "/palette", &request_id),
    };

    match build_palette(&params) {
        Ok(palette) => Json(palette).into_response(),
        Err(error) => {
            log_request_error(
                &error,
                "/palette",
                &request_id,
                Some(&format!("n={}", params.n)),
            );
            error_response(&error, &request_id)
        }
    }
}

fn build_palette(params: &PaletteQuery) -> Result<PaletteResponse> {
    if params.n > MAX_PALETTE_SIZE {
        return Err(MapperError::InvalidParameter {
            param: "n".to_string(),
            message: format!("At most {} colors can be requested", MAX_PALETTE_SIZE),
        });
    }

    let alpha = params.alpha.unwrap_or(DEFAULT_ALPHA);
    let colors = generate_palette(params.n, alpha);
    let hex = colors.iter().map(Rgba::to_hex).collect();

    Ok(PaletteResponse {
        count: colors.len(),
        alpha,
        colors,
        hex,
    })
}
