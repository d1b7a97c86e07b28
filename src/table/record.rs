//! Canonical coordinate rows.

use serde::{Deserialize, Serialize};

/// One normalized row.
///
/// `latitude` and `longitude` are always finite. `color` is the raw text of
/// the color cell, or `None` when the row has no color yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub color: Option<String>,
}

impl CoordinateRecord {
    /// Create a record without a color
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            color: None,
        }
    }

    /// Create a record carrying a color string
    pub fn with_color(latitude: f64, longitude: f64, color: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            color: Some(color.into()),
        }
    }
}

/// Ordered sequence of normalized rows.
///
/// Row order is the order of the surviving input rows. The table remembers
/// whether the input carried a color column so that export reproduces the
/// layout it was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTable {
    records: Vec<CoordinateRecord>,
    has_color_column: bool,
}

impl CoordinateTable {
    /// Create a table from already-validated records
    pub fn new(records: Vec<CoordinateRecord>, has_color_column: bool) -> Self {
        Self {
            records,
            has_color_column,
        }
    }

    /// All rows in order
    pub fn records(&self) -> &[CoordinateRecord] {
        &self.records
    }

    /// Iterate over the rows in order
    pub fn iter(&self) -> std::slice::Iter<'_, CoordinateRecord> {
        self.records.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source table carried a color column
    pub fn has_color_column(&self) -> bool {
        self.has_color_column
    }

    /// Number of rows that already carry a color string
    pub fn colored_count(&self) -> usize {
        self.records.iter().filter(|r| r.color.is_some()).count()
    }

    /// Fill every missing color with a value derived from the row index.
    ///
    /// Existing colors and coordinates are left untouched. The resulting
    /// table always has a color column.
    pub fn fill_missing_colors<F>(mut self, mut color_for: F) -> Self
    where
        F: FnMut(usize) -> String,
    {
        for (index, record) in self.records.iter_mut().enumerate() {
            if record.color.is_none() {
                record.color = Some(color_for(index));
            }
        }
        self.has_color_column = true;
        self
    }
}

impl<'a> IntoIterator for &'a CoordinateTable {
    type Item = &'a CoordinateRecord;
    type IntoIter = std::slice::Iter<'a, CoordinateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
