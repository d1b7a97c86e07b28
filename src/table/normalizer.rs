//! Table normalization.
//!
//! Latitude and longitude are taken positionally from the first two columns
//! and an optional color from the third. Header text is never inspected.
//!
//! In [`HeaderMode::Auto`] the input is parsed twice at most:
//! 1. headerless, every row is data;
//! 2. if that yields fewer than two columns, with the first row as header.
//!
//! If neither attempt produces two columns the call fails with
//! [`MapperError::MalformedInput`]. A header row that survives into the data
//! in the first attempt fails numeric coercion and is dropped like any other
//! bad row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

use super::raw::{ParseMode, RawTable};
use super::record::{CoordinateRecord, CoordinateTable};
use crate::error::{MapperError, Result};

/// Minimum column count (latitude, longitude)
pub const MIN_COLUMNS: usize = 2;

const LATITUDE_COLUMN: usize = 0;
const LONGITUDE_COLUMN: usize = 1;
const COLOR_COLUMN: usize = 2;

/// Whether the input starts with a header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// No header row
    Absent,
    /// The first row is a header
    Present,
    /// Try headerless first, then with a header
    #[default]
    Auto,
}

impl HeaderMode {
    /// Parse attempts in the order they are tried
    fn attempts(self) -> &'static [ParseMode] {
        match self {
            HeaderMode::Absent => &[ParseMode::Headerless],
            HeaderMode::Present => &[ParseMode::FirstRowHeader],
            HeaderMode::Auto => &[ParseMode::Headerless, ParseMode::FirstRowHeader],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderMode::Absent => "absent",
            HeaderMode::Present => "present",
            HeaderMode::Auto => "auto",
        }
    }
}

impl fmt::Display for HeaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderMode {
    type Err = MapperError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absent" | "false" | "no" => Ok(HeaderMode::Absent),
            "present" | "true" | "yes" => Ok(HeaderMode::Present),
            "auto" => Ok(HeaderMode::Auto),
            _ => Err(MapperError::InvalidParameter {
                param: "header".to_string(),
                message: format!(
                    "Unknown header mode: {}. Valid values are 'auto', 'present', 'absent'",
                    s
                ),
            }),
        }
    }
}

/// Read a byte stream once and normalize it
pub fn normalize_reader<R: Read>(mut reader: R, header: HeaderMode) -> Result<CoordinateTable> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    normalize(&data, header)
}

/// Normalize an in-memory buffer into a coordinate table
pub fn normalize(data: &[u8], header: HeaderMode) -> Result<CoordinateTable> {
    let mut widest = 0;

    for &mode in header.attempts() {
        let raw = RawTable::parse(data, mode)?;

        if raw.is_empty() {
            debug!(mode = ?mode, "Input is empty, producing an empty table");
            return Ok(CoordinateTable::default());
        }

        let width = raw.width();
        if width >= MIN_COLUMNS {
            return Ok(coerce_rows(&raw, mode));
        }

        debug!(
            mode = ?mode,
            columns = width,
            "Parse attempt produced too few columns"
        );
        widest = widest.max(width);
    }

    Err(MapperError::insufficient_columns(widest))
}

/// Coerce a cell to a finite number, or `None` when it is missing
pub fn coerce_numeric(cell: Option<&str>) -> Option<f64> {
    let value = cell?.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

fn coerce_rows(raw: &RawTable, mode: ParseMode) -> CoordinateTable {
    let has_color_column = raw.width() > COLOR_COLUMN;

    let records: Vec<CoordinateRecord> = raw
        .rows()
        .iter()
        .filter_map(|row| {
            let cell = |index: usize| row.get(index).map(String::as_str);
            let latitude = coerce_numeric(cell(LATITUDE_COLUMN))?;
            let longitude = coerce_numeric(cell(LONGITUDE_COLUMN))?;
            let color = if has_color_column {
                cell(COLOR_COLUMN)
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
            } else {
                None
            };
            Some(CoordinateRecord {
                latitude,
                longitude,
                color,
            })
        })
        .collect();

    debug!(
        mode = ?mode,
        input_rows = raw.rows().len(),
        kept_rows = records.len(),
        dropped_rows = raw.rows().len() - records.len(),
        has_color_column = has_color_column,
        header = ?raw.header(),
        "Normalized coordinate table"
    );

    CoordinateTable::new(records, has_color_column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headerless_positional_columns() {
        let table = normalize(b"10.5,20.25\n-33.9,151.2\n", HeaderMode::Auto).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], CoordinateRecord::new(10.5, 20.25));
        assert_eq!(table.records()[1], CoordinateRecord::new(-33.9, 151.2));
        assert!(!table.has_color_column());
    }

    #[test]
    fn test_header_row_is_dropped_by_coercion() {
        let table = normalize(b"lat,lon\n1,2\n3,4\n", HeaderMode::Auto).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].latitude, 1.0);
    }

    #[test]
    fn test_header_names_are_not_matched() {
        // Columns are positional: "longitude" first still means latitude.
        let table = normalize(b"longitude,latitude\n5,6\n", HeaderMode::Present).unwrap();
        assert_eq!(table.records(), &[CoordinateRecord::new(5.0, 6.0)]);
    }

    #[test]
    fn test_numeric_header_consumed_in_present_mode() {
        let table = normalize(b"1,2\n3,4\n", HeaderMode::Present).unwrap();
        assert_eq!(table.records(), &[CoordinateRecord::new(3.0, 4.0)]);
    }

    #[test]
    fn test_invalid_rows_dropped_in_order() {
        let input = b"1,abc\n2,2\n,3\n4,\n5,nan\n6,1e999\n7,7\n";
        let table = normalize(input, HeaderMode::Absent).unwrap();
        assert_eq!(
            table.records(),
            &[CoordinateRecord::new(2.0, 2.0), CoordinateRecord::new(7.0, 7.0)]
        );
    }

    #[test]
    fn test_one_valid_three_invalid() {
        let input = b"10,20\n11,east\n12,west\n13,??\n";
        let table = normalize(input, HeaderMode::Auto).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_color_column_passthrough() {
        let input = b"1,2,#ff0000\n3,4,\n5,6,not-a-color\n";
        let table = normalize(input, HeaderMode::Auto).unwrap();
        assert!(table.has_color_column());
        assert_eq!(table.records()[0].color.as_deref(), Some("#ff0000"));
        assert_eq!(table.records()[1].color, None);
        assert_eq!(table.records()[2].color.as_deref(), Some("not-a-color"));
    }

    #[test]
    fn test_single_column_fails() {
        let err = normalize(b"1\n2\n3\n", HeaderMode::Auto).unwrap_err();
        assert!(matches!(err, MapperError::MalformedInput { .. }));
        assert!(err.to_string().contains("at least two columns"));

        let err = normalize(b"lat\n1\n", HeaderMode::Present).unwrap_err();
        assert!(matches!(err, MapperError::MalformedInput { .. }));
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        for mode in [HeaderMode::Auto, HeaderMode::Absent, HeaderMode::Present] {
            let table = normalize(b"", mode).unwrap();
            assert!(table.is_empty());
        }
    }

    #[test]
    fn test_all_rows_invalid_is_empty_table() {
        let table = normalize(b"a,b\nc,d\n", HeaderMode::Auto).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_normalize_reader() {
        let cursor = std::io::Cursor::new(b"1,2\n".to_vec());
        let table = normalize_reader(cursor, HeaderMode::Auto).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric(Some(" 42.5 ")), Some(42.5));
        assert_eq!(coerce_numeric(Some("-1e3")), Some(-1000.0));
        assert_eq!(coerce_numeric(Some("")), None);
        assert_eq!(coerce_numeric(Some("inf")), None);
        assert_eq!(coerce_numeric(Some("NaN")), None);
        assert_eq!(coerce_numeric(Some("12 N")), None);
        assert_eq!(coerce_numeric(None), None);
    }

    #[test]
    fn test_header_mode_from_str() {
        assert_eq!("auto".parse::<HeaderMode>().unwrap(), HeaderMode::Auto);
        assert_eq!("Present".parse::<HeaderMode>().unwrap(), HeaderMode::Present);
        assert_eq!("false".parse::<HeaderMode>().unwrap(), HeaderMode::Absent);
        assert!("maybe".parse::<HeaderMode>().is_err());
    }
}
