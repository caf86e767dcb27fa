//! Numeric coercion & cleaning
//!
//! Converts raw table cells to `f64` and drops rows whose required fields are
//! missing or non-numeric. Dropped rows never reach an analyzer; an empty
//! result is not an error here (analyzers detect and report it).

use log::warn;

use crate::data::Table;

use super::error::AnalysisError;
use super::types::{DuplicatePair, Measurement};

/// Parse a cell as a finite float; empty cells are missing
fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column_index(table: &Table, name: &str) -> Result<usize, AnalysisError> {
    table
        .column_index(name)
        .ok_or_else(|| AnalysisError::MissingColumn {
            name: name.to_string(),
        })
}

/// Extract cleaned `{sample_id, measured_value}` rows from a mapped table
///
/// A row is retained only if its id is non-empty and its value parses as a
/// finite number. Original row order is preserved.
pub fn clean_measurements(
    table: &Table,
    id_field: &str,
    value_field: &str,
) -> Result<Vec<Measurement>, AnalysisError> {
    let id_idx = column_index(table, id_field)?;
    let value_idx = column_index(table, value_field)?;

    let mut dropped = 0usize;
    let rows = table
        .rows()
        .filter_map(|row| {
            let sample_id = row[id_idx].trim();
            match (sample_id.is_empty(), parse_cell(&row[value_idx])) {
                (false, Some(measured_value)) => Some(Measurement {
                    sample_id: sample_id.to_string(),
                    measured_value,
                }),
                _ => {
                    dropped += 1;
                    None
                }
            }
        })
        .collect();

    if dropped > 0 {
        warn!("dropped {dropped} row(s) with missing or non-numeric '{value_field}'");
    }
    Ok(rows)
}

/// Extract cleaned `{original_value, duplicate_value}` pairs from a mapped table
///
/// A row is retained only if both values parse as finite numbers. Original
/// row order is preserved.
pub fn clean_pairs(
    table: &Table,
    original_field: &str,
    duplicate_field: &str,
) -> Result<Vec<DuplicatePair>, AnalysisError> {
    let original_idx = column_index(table, original_field)?;
    let duplicate_idx = column_index(table, duplicate_field)?;

    let mut dropped = 0usize;
    let pairs = table
        .rows()
        .filter_map(|row| {
            match (parse_cell(&row[original_idx]), parse_cell(&row[duplicate_idx])) {
                (Some(original_value), Some(duplicate_value)) => Some(DuplicatePair {
                    original_value,
                    duplicate_value,
                }),
                _ => {
                    dropped += 1;
                    None
                }
            }
        })
        .collect();

    if dropped > 0 {
        warn!(
            "dropped {dropped} row(s) with missing or non-numeric \
             '{original_field}'/'{duplicate_field}'"
        );
    }
    Ok(pairs)
}
