//! CSV export of a coordinate table.
//!
//! The header row is `latitude,longitude`, plus `color` when the table has a
//! color column. Floats are written in shortest round-trip form and missing
//! colors as empty cells, so normalizing the output reproduces the table.

use csv::WriterBuilder;
use std::io::Write;

use crate::error::{MapperError, Result};
use crate::table::CoordinateTable;

const LATITUDE_HEADER: &str = "latitude";
const LONGITUDE_HEADER: &str = "longitude";
const COLOR_HEADER: &str = "color";

/// Write the table as CSV to any writer
pub fn export_csv<W: Write>(table: &CoordinateTable, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    if table.has_color_column() {
        wtr.write_record([LATITUDE_HEADER, LONGITUDE_HEADER, COLOR_HEADER])?;
    } else {
        wtr.write_record([LATITUDE_HEADER, LONGITUDE_HEADER])?;
    }

    for record in table {
        let latitude = record.latitude.to_string();
        let longitude = record.longitude.to_string();
        if table.has_color_column() {
            let color = record.color.as_deref().unwrap_or("");
            wtr.write_record([latitude.as_str(), longitude.as_str(), color])?;
        } else {
            wtr.write_record([latitude.as_str(), longitude.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Export the table to an in-memory CSV string
pub fn export_csv_string(table: &CoordinateTable) -> Result<String> {
    let mut buffer = Vec::new();
    export_csv(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| MapperError::Server {
        message: format!("Exported CSV is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{normalize, CoordinateRecord, HeaderMode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_column_layout() {
        let table = CoordinateTable::new(
            vec![CoordinateRecord::new(10.0, 20.5), CoordinateRecord::new(-1.25, 3.0)],
            false,
        );
        let csv = export_csv_string(&table).unwrap();
        assert_eq!(csv, "latitude,longitude\n10,20.5\n-1.25,3\n");
    }

    #[test]
    fn test_color_layout() {
        let table = CoordinateTable::new(
            vec![
                CoordinateRecord::with_color(1.0, 2.0, "#fff"),
                CoordinateRecord::new(3.0, 4.0),
            ],
            true,
        );
        let csv = export_csv_string(&table).unwrap();
        assert_eq!(csv, "latitude,longitude,color\n1,2,#fff\n3,4,\n");
    }

    #[test]
    fn test_round_trip() {
        let input = b"lat,lon,color\n40.7128,-74.006,#abc\n34.0522,-118.2437,\nbad,1,#000\n0.1,0.2,x\n";
        let first = normalize(input, HeaderMode::Auto).unwrap();
        let exported = export_csv_string(&first).unwrap();
        let second = normalize(exported.as_bytes(), HeaderMode::Auto).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_exports_header_only() {
        let csv = export_csv_string(&CoordinateTable::default()).unwrap();
        assert_eq!(csv, "latitude,longitude\n");
        let table = normalize(csv.as_bytes(), HeaderMode::Auto).unwrap();
        assert!(table.is_empty());
    }
}
