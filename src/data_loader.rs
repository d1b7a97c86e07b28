//! CSV dataset loading.
//!
//! Reads a CSV file from disk in a single read, runs the pipeline over it and
//! builds the application state.

use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::config::Config;
use crate::error::{MapperError, Result};
use crate::logging::{log_operation_end, log_operation_start, log_table_stats};
use crate::pipeline::{process, PipelineOptions};
use crate::state::{AppState, Dataset};

/// Load the configured dataset (if any) and create the application state
pub fn load_state(config: Config) -> Result<AppState> {
    let dataset = match &config.data.file_path {
        Some(path) => Some(load_dataset(path, &PipelineOptions::from(&config.map))?),
        None => {
            info!("No dataset configured; serving uploads only");
            None
        }
    };

    Ok(AppState::new(config, dataset))
}

/// Load a CSV file into a colored dataset
pub fn load_dataset(path: &Path, options: &PipelineOptions) -> Result<Dataset> {
    if !path.exists() {
        return Err(MapperError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let source = path.display().to_string();
    let start = Instant::now();
    log_operation_start("load_dataset", Some(&source));

    let result = std::fs::read(path)
        .map_err(MapperError::from)
        .and_then(|data| process(&data, options));
    log_operation_end("load_dataset", start, result.is_ok());

    let table = result?;
    log_table_stats(&source, &table);

    Ok(Dataset { source, table })
}
