//! Application state management for warehouse-mapper.
//!
//! The state is immutable once built: configuration plus an optional
//! dataset loaded at startup. Uploaded tables are processed per request and
//! never stored.

use std::sync::Arc;

use crate::color::ColoredTable;
use crate::config::Config;
use crate::error::{MapperError, Result};
use crate::pipeline::PipelineOptions;

/// A table loaded at startup
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the table came from (file path)
    pub source: String,
    /// The normalized, colored table
    pub table: ColoredTable,
}

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Preloaded dataset, if any
    pub dataset: Option<Dataset>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, dataset: Option<Dataset>) -> Self {
        Self { config, dataset }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, dataset: Option<Dataset>) -> Arc<Self> {
        Arc::new(Self::new(config, dataset))
    }

    /// Get the preloaded dataset with error handling
    pub fn dataset_checked(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or_else(|| MapperError::DataNotFound {
            message: "No dataset was loaded at startup; POST a CSV instead".to_string(),
        })
    }

    /// Pipeline settings derived from the map configuration
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::from(&self.config.map)
    }

    /// Validate that the application state is ready for use
    ///
    /// A preloaded dataset always has one fill color per row, since
    /// [`ColoredTable`] can only be built by the color assigners.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::assign_sweep;
    use crate::table::{CoordinateRecord, CoordinateTable};

    #[test]
    fn test_state_without_dataset() {
        let state = AppState::new(Config::default(), None);
        assert!(state.validate().is_ok());
        assert!(matches!(
            state.dataset_checked(),
            Err(MapperError::DataNotFound { .. })
        ));
    }

    #[test]
    fn test_state_with_dataset_validates() {
        let table = CoordinateTable::new(vec![CoordinateRecord::new(1.0, 2.0)], false);
        let dataset = Dataset {
            source: "inline".to_string(),
            table: assign_sweep(table, 220),
        };
        let state = AppState::new(Config::default(), Some(dataset));

        assert!(state.validate().is_ok());
        assert_eq!(state.dataset_checked().unwrap().table.fill_colors().len(), 1);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let mut config = Config::default();
        config.map.point_radius = 1;
        let state = AppState::new(config, None);

        assert!(matches!(
            state.validate(),
            Err(MapperError::Config { .. })
        ));
    }

    #[test]
    fn test_pipeline_options_follow_config() {
        let mut config = Config::default();
        config.map.alpha = 17;
        let state = AppState::new(config, None);
        assert_eq!(state.pipeline_options().alpha, 17);
    }
}
