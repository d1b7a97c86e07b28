//! Raw input to colored table to map view.
//!
//! Each call builds a fresh table from its input; nothing is cached between
//! calls.

use std::io::Read;
use tracing::debug;

use crate::color::{ColorAssigner, ColorStrategy, ColoredTable};
use crate::config::MapConfig;
use crate::error::Result;
use crate::logging::log_timed_operation;
use crate::render::MapView;
use crate::table::{normalize, HeaderMode};

/// Settings for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub header_mode: HeaderMode,
    pub color_strategy: ColorStrategy,
    pub alpha: u8,
    pub random_seed: Option<u64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from(&MapConfig::default())
    }
}

impl From<&MapConfig> for PipelineOptions {
    fn from(config: &MapConfig) -> Self {
        Self {
            header_mode: config.header_mode,
            color_strategy: config.color_strategy,
            alpha: config.alpha,
            random_seed: config.random_seed,
        }
    }
}

impl PipelineOptions {
    fn assigner(&self) -> ColorAssigner {
        ColorAssigner::new(self.color_strategy, self.alpha).with_seed(self.random_seed)
    }
}

/// Normalize raw CSV bytes and attach a fill color to every row
pub fn process(data: &[u8], options: &PipelineOptions) -> Result<ColoredTable> {
    log_timed_operation("normalize_and_color", || -> Result<ColoredTable> {
        let table = normalize(data, options.header_mode)?;
        debug!(
            rows = table.len(),
            strategy = %options.color_strategy,
            "Assigning colors"
        );
        Ok(options.assigner().assign(table))
    })
}

/// Read a stream once, then run [`process`]
pub fn process_reader<R: Read>(mut reader: R, options: &PipelineOptions) -> Result<ColoredTable> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    process(&data, options)
}

/// Run the whole pipeline and shape the result for the renderer
pub fn render_map(data: &[u8], options: &PipelineOptions, radius_meters: u32) -> Result<MapView> {
    let colored = process(data, options)?;
    Ok(MapView::from_colored(&colored, radius_meters))
}
