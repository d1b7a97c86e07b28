//! Coordinate table ingestion.
//!
//! This module turns raw delimited text of unknown shape into a canonical
//! table of latitude/longitude rows with an optional color column.

pub mod normalizer;
pub mod raw;
pub mod record;

pub use normalizer::{coerce_numeric, normalize, normalize_reader, HeaderMode};
pub use raw::{ParseMode, RawTable};
pub use record::{CoordinateRecord, CoordinateTable};
