//! # warehouse-mapper
//!
//! Turns a user-supplied table of coordinates into colored map points.
//!
//! ## Pipeline
//!
//! - **Table normalization**: raw CSV of unknown shape, with or without a
//!   header row, becomes a canonical `latitude`/`longitude`/`color` table.
//!   Rows with non-numeric coordinates are dropped.
//! - **Color assignment**: every row gets a fill color, either from an
//!   evenly spaced HSL hue sweep, from random hex strings, or from the hex
//!   color already present in the row (with a fixed fallback).
//! - **Render boundary**: points with `[longitude, latitude]` positions and an
//!   initial viewport, ready for an external map renderer.
//!
//! The same pipeline is served over HTTP by the `warehouse-mapper` binary and
//! run from the command line by `mapcsv`.

pub mod color;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod export;
pub mod handlers;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod table;

pub use color::{
    generate_palette, parse_hex_color, ColorAssigner, ColorStrategy, ColoredTable, Rgba,
    FALLBACK_COLOR,
};
pub use config::Config;
pub use error::{MapperError, Result};
pub use export::{export_csv, export_csv_string};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_error, log_operation_end,
    log_operation_start, log_request_error, log_table_stats, log_timed_operation,
};
pub use pipeline::{process, process_reader, render_map, PipelineOptions};
pub use render::{initial_viewport, MapPoint, MapView, Viewport};
pub use state::{AppState, Dataset};
pub use table::{normalize, normalize_reader, CoordinateRecord, CoordinateTable, HeaderMode};
