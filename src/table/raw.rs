//! Raw delimited-text parsing.
//!
//! A `RawTable` is the untyped grid produced by one parse attempt. Cells are
//! trimmed strings; rows may be ragged.

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::error::Result;

/// How the first row of the input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Every row is data
    Headerless,
    /// The first row is a header and is discarded
    FirstRowHeader,
}

/// Untyped rows produced by a single parse attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse an in-memory buffer in the given mode
    pub fn parse(data: &[u8], mode: ParseMode) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(data);

        let mut rows = Vec::new();
        let mut record = ByteRecord::new();
        while reader.read_byte_record(&mut record)? {
            rows.push(record.iter().map(decode_cell).collect::<Vec<_>>());
        }

        let header = match mode {
            ParseMode::FirstRowHeader if !rows.is_empty() => Some(rows.remove(0)),
            _ => None,
        };

        Ok(Self { header, rows })
    }

    /// Header cells, when parsed in header mode
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Column count: the widest row seen, header included
    pub fn width(&self) -> usize {
        let header_width = self.header.as_ref().map_or(0, Vec::len);
        self.rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(header_width)
    }

    /// True when the input contained no rows at all
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }
}

fn decode_cell(cell: &[u8]) -> String {
    String::from_utf8_lossy(cell).into_owned()
}
