//! warehouse-mapper - serve normalized, colored coordinate tables
//!
//! This is the main entry point for the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use warehouse_mapper::data_loader::load_state;
use warehouse_mapper::handlers::router;
use warehouse_mapper::{init_tracing, log_error, Config, MapperError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config.log_level);

    info!("Starting warehouse-mapper v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        log_error(&e, "Invalid configuration");
        e
    })?;

    let app_state = load_state(config.clone()).map_err(|e| {
        log_error(&e, "Failed to load dataset");
        e
    })?;

    app_state.validate().map_err(|e| {
        log_error(&e, "Invalid application state");
        e
    })?;

    if let Some(dataset) = &app_state.dataset {
        info!(
            source = %dataset.source,
            rows = dataset.table.len(),
            "Serving preloaded dataset"
        );
    }

    let app = router(Arc::new(app_state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| MapperError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| MapperError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MapperError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
