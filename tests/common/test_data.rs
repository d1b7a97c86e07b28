//! Test data generation utilities.
//!
//! CSV fixtures with known shapes for exercising the normalizer and server.

use std::io::Write;
use std::path::Path;

/// Warehouses with a header row and no color column
pub const WAREHOUSES_WITH_HEADER: &str = "\
Latitude,Longitude
47.6062,-122.3321
34.0522,-118.2437
41.8781,-87.6298
";

/// Headerless rows with a color column, including empty and invalid colors
pub const COLORED_HEADERLESS: &str = "\
40.7128,-74.0060,#ff0000
29.7604,-95.3698,#0f0
33.4484,-112.0740,
39.7392,-104.9903,teal
";

/// One valid row and three rows with a non-numeric longitude
pub const ONE_VALID_THREE_INVALID: &str = "\
10.0,20.0
11.0,east
12.0,
13.0,N/A
";

/// A single column, which cannot be normalized
pub const SINGLE_COLUMN: &str = "\
latitude
47.6
34.0
";

/// Write a CSV fixture to disk
pub fn write_csv(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// A headerless grid of `count` valid points
pub fn grid_points(count: usize) -> String {
    (0..count)
        .map(|i| format!("{},{}\n", i as f64 * 0.5, -(i as f64) * 0.25))
        .collect()
}
