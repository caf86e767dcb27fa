//! Delimited-text ingestion with delimiter detection
//!
//! Accepts file paths or pasted text, sniffs the delimiter from the header
//! line, and produces a [`Table`]. Ragged rows are padded to the header width
//! (with a warning) rather than rejected.

use std::fs;
use std::path::Path;

use log::warn;

use super::table::{Table, TableError};

/// Candidate delimiters, first wins ties
const CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

/// Sniff the delimiter from the first non-empty line
///
/// Counts occurrences of `,`, `;`, and tab; the most frequent wins, comma on
/// ties.
pub fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");

    let mut best = CANDIDATES[0];
    let mut best_count = first_line.bytes().filter(|b| *b == best).count();
    for candidate in CANDIDATES.into_iter().skip(1) {
        let count = first_line.bytes().filter(|b| *b == candidate).count();
        // Strictly greater, so ties keep the earlier candidate
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Parse delimited text (file contents or clipboard paste) into a [`Table`]
pub fn read_str(text: &str) -> Result<Table, TableError> {
    if text.trim().is_empty() {
        return Err(TableError::NoHeader);
    }
    let delimiter = detect_delimiter(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        return Err(TableError::NoHeader);
    }

    let mut ragged = 0usize;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != headers.len() {
            ragged += 1;
        }
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    if ragged > 0 {
        warn!("padded or truncated {ragged} row(s) to {} column(s)", headers.len());
    }
    if rows.is_empty() {
        return Err(TableError::Empty);
    }

    Ok(Table::new(headers, rows))
}

/// Read a delimited file into a [`Table`]
pub fn read_path(path: impl AsRef<Path>) -> Result<Table, TableError> {
    let text = fs::read_to_string(path)?;
    read_str(&text)
}
