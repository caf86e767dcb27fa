//! Generic tabular structure consumed by mapping and cleaning

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`Table`] from external input
#[derive(Error, Debug)]
pub enum TableError {
    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input has no header row
    #[error("input contains no header row")]
    NoHeader,

    /// Input has headers but no data rows
    #[error("input contains no data rows")]
    Empty,
}

/// An in-memory table of string cells with named columns
///
/// This is the format-agnostic shape all ingestion converges on: ordered
/// headers plus rows of cells. Cells stay untyped here; numeric coercion
/// happens per analysis in the QC cleaning stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTable")]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Unvalidated mirror routing deserialization through [`Table::new`], so a
/// deserialized table keeps the rows-match-header-width invariant
#[derive(Deserialize)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl From<RawTable> for Table {
    fn from(raw: RawTable) -> Self {
        Table::new(raw.headers, raw.rows)
    }
}

impl Table {
    /// Build a table, padding or truncating each row to the header width
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Column names, in order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate over data rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Cell at (row, column name), if both exist
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// All values of a named column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }
}
