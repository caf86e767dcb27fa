//! Serialization of [`AnalysisResult`] for export
//!
//! The core exposes exactly three projections of a result — the series list,
//! the flat summary, and the row-level table — and this module writes them
//! out as CSV or JSON. Rendering into charts or documents is the consumer's
//! business; nothing here assumes a particular presentation technology.

use thiserror::Error;

use crate::qc::AnalysisResult;

/// Errors raised while serializing a result
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Buffered CSV writer could not be flushed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn csv_from_records<I, R, C>(records: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.write_record(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // csv output of valid UTF-8 input is valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Row-level table with derived columns, as CSV (header row included)
pub fn rows_to_csv(result: &AnalysisResult) -> Result<String, ReportError> {
    let (headers, rows) = result.table();
    let mut records: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    records.push(headers.iter().map(|h| h.to_string()).collect());
    records.extend(rows);
    csv_from_records(records)
}

/// Flat statistic/value summary table, as CSV
pub fn summary_to_csv(result: &AnalysisResult) -> Result<String, ReportError> {
    let mut records: Vec<[String; 2]> = vec![["statistic".to_string(), "value".to_string()]];
    records.extend(
        result
            .summary
            .iter()
            .map(|(label, value)| [label.clone(), value.clone()]),
    );
    csv_from_records(records)
}

/// Complete result (series, summary, rows, warnings) as pretty-printed JSON
pub fn to_json(result: &AnalysisResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}
