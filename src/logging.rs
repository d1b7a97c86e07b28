//! Logging utilities for warehouse-mapper.
//!
//! Structured `tracing` helpers shared by the server, the loader and the
//! pipeline.

use std::time::Instant;
use tracing::{debug, error, info, warn, Level};

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::color::ColoredTable;
use crate::error::MapperError;

/// Request spans at INFO, request and response events at DEBUG
pub fn create_http_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::DEBUG)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// Install the global subscriber. `RUST_LOG`, when set, replaces `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Log the start of a long-running step such as a dataset load
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    info!(
        operation = operation,
        details = details.unwrap_or("-"),
        "Operation started"
    );
}

/// Log how a step started with [`log_operation_start`] ended
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    if success {
        info!(operation = operation, elapsed_ms, "Operation finished");
    } else {
        warn!(operation = operation, elapsed_ms, "Operation failed");
    }
}

/// Run `f`, logging its duration under a fresh operation id
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log row and color counts for a table that is ready to serve
pub fn log_table_stats(source: &str, table: &ColoredTable) {
    let inner = table.table();
    info!(
        source = source,
        rows = inner.len(),
        rows_with_color = inner.colored_count(),
        color_column = inner.has_color_column(),
        "Coordinate table ready"
    );
}

/// Log a fatal error raised outside request handling
pub fn log_error(error: &MapperError, context: &str) {
    error!(error = %error, context, "Startup step failed");
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &MapperError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    error!(
        error = %error,
        endpoint = endpoint,
        request_id = request_id,
        params = params.unwrap_or("none"),
        "Request processing error"
    );
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[tokio::test]
    async fn test_trace_layer_wraps_router() {
        use axum::{body::Body, http::Request, routing::get, Router};
        use tower::ServiceExt;

        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(create_http_trace_layer());

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[test]
    fn test_log_timed_operation_returns_value() {
        let result = log_timed_operation("test_operation", || 6 * 7);
        assert_eq!(result, 42);
    }
}
