//! QC types: analysis results, tolerance configuration, and row records
//!
//! This module defines all public types for QC analysis including:
//! - [`AnalysisResult`]: Complete structured results for one analysis run
//! - [`ToleranceSpec`]: Tolerance configuration for reference standards
//! - [`ControlType`]: The three supported control-chart modes
//! - Per-mode row record structs with derived fields

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Configuration Types
// ============================================================================

/// The three supported control-chart modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    /// Certified reference material (CRM) standards
    ReferenceStandard,
    /// Blank samples (contamination / detection-limit monitoring)
    Blank,
    /// Duplicate pairs (precision / reproducibility)
    DuplicatePair,
}

impl ControlType {
    /// Mapped field names each mode requires in its input table
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ControlType::ReferenceStandard | ControlType::Blank => {
                &["sample_id", "measured_value"]
            }
            ControlType::DuplicatePair => &["original_value", "duplicate_value"],
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlType::ReferenceStandard => write!(f, "reference standard"),
            ControlType::Blank => write!(f, "blank"),
            ControlType::DuplicatePair => write!(f, "duplicate pair"),
        }
    }
}

/// How control limits are derived from the certified reference value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceSpec {
    /// Limits at `reference_value * (1 ± p/100)`
    Percentage {
        /// Tolerance as a percentage of the reference value
        tolerance_percent: f64,
    },
    /// Limits at `reference_value ± m * reference_stddev`
    ///
    /// Requires a positive reference standard deviation; limit computation
    /// fails with a configuration error otherwise.
    StdDevMultiple {
        /// Number of reference standard deviations on each side
        multiplier: f64,
    },
}

impl fmt::Display for ToleranceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceSpec::Percentage { tolerance_percent } => {
                write!(f, "{tolerance_percent:.2}%")
            }
            ToleranceSpec::StdDevMultiple { multiplier } => {
                write!(f, "{multiplier:.1} × std dev")
            }
        }
    }
}

/// Acceptance bounds around a reference value
///
/// `lower <= upper` whenever the inputs are valid; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    /// Lower acceptance bound (inclusive)
    pub lower: f64,
    /// Upper acceptance bound (inclusive)
    pub upper: f64,
}

impl ControlLimits {
    /// Check whether a value lies within the limits, inclusive at both ends
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

// ============================================================================
// Input Rows
// ============================================================================

/// One cleaned sample for reference-standard or blank analysis
///
/// Rows reaching an analyzer have already passed numeric coercion; rows with
/// missing or non-numeric values are dropped upstream by
/// [`clean_measurements`](super::clean_measurements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Sample identifier, kept in original row order for the chart axis
    pub sample_id: String,
    /// Measured assay value
    pub measured_value: f64,
}

/// One cleaned original/duplicate pair for duplicate analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
    /// First measurement of the physical sample
    pub original_value: f64,
    /// Independent re-measurement of the same sample
    pub duplicate_value: f64,
}

// ============================================================================
// Output: series, row records, warnings
// ============================================================================

/// A named, ordered plot series
///
/// For reference-standard and blank charts, `x` is the 0-based sample index
/// (sample ids travel in the row records so a renderer can relabel ticks).
/// For duplicate charts, `x` is the original value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Display label
    pub label: String,
    /// Ordered (x, y) pairs
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Create a series from explicit points
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Create a constant-value line spanning sample indices `0..n`
    pub fn constant(label: impl Into<String>, n: usize, value: f64) -> Self {
        Self {
            label: label.into(),
            points: (0..n).map(|i| (i as f64, value)).collect(),
        }
    }
}

/// Pass/fail classification for a reference-standard row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardStatus {
    /// Within the control limits (inclusive at both ends)
    Ok,
    /// Outside the control limits
    OutOfLimits,
}

impl fmt::Display for StandardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandardStatus::Ok => write!(f, "OK"),
            StandardStatus::OutOfLimits => write!(f, "Out of limits"),
        }
    }
}

/// Classification for a blank row against the estimated detection limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankStatus {
    /// At or below the detection limit
    Ok,
    /// Above the detection limit
    Elevated,
}

impl fmt::Display for BlankStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlankStatus::Ok => write!(f, "OK"),
            BlankStatus::Elevated => write!(f, "Elevated"),
        }
    }
}

/// Reference-standard row with derived fields
///
/// `deviation_percent` and `z_score` are `None` when undefined (zero reference
/// value, or no positive reference standard deviation) — never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRecord {
    /// Sample identifier
    pub sample_id: String,
    /// Measured assay value
    pub measured_value: f64,
    /// Relative deviation from the reference value, in percent
    pub deviation_percent: Option<f64>,
    /// Deviation in reference standard deviations
    pub z_score: Option<f64>,
    /// Pass/fail against the control limits
    pub status: StandardStatus,
}

/// Blank row with its detection-limit classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlankRecord {
    /// Sample identifier
    pub sample_id: String,
    /// Measured assay value
    pub measured_value: f64,
    /// Classification against the estimated LOD
    pub status: BlankStatus,
}

/// Duplicate pair with derived difference fields
///
/// `rel_diff_percent` is `None` when the pair mean is zero — never NaN, and
/// excluded from the mean relative difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    /// First measurement
    pub original_value: f64,
    /// Re-measurement
    pub duplicate_value: f64,
    /// Absolute difference between the two measurements
    pub abs_diff: f64,
    /// Absolute difference relative to the pair mean, in percent
    pub rel_diff_percent: Option<f64>,
}

/// Per-mode row records, tagged by analysis mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowRecords {
    /// Reference-standard rows
    Standard(Vec<StandardRecord>),
    /// Blank rows
    Blank(Vec<BlankRecord>),
    /// Duplicate-pair rows
    Duplicate(Vec<DuplicateRecord>),
}

impl RowRecords {
    /// Number of rows in the result
    pub fn len(&self) -> usize {
        match self {
            RowRecords::Standard(rows) => rows.len(),
            RowRecords::Blank(rows) => rows.len(),
            RowRecords::Duplicate(rows) => rows.len(),
        }
    }

    /// Whether the result carries no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Non-fatal, row-scoped analysis warnings
///
/// Each warning marks a derived value that could not be computed; the affected
/// field is `None` and aggregate statistics exclude it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QcWarning {
    /// Deviation percent divides by a zero reference value
    UndefinedDeviation {
        /// Sample whose deviation is undefined
        sample_id: String,
    },
    /// Relative difference divides by a zero pair mean
    UndefinedRelativeDiff {
        /// 0-based row index of the affected pair
        index: usize,
    },
    /// Pearson correlation is undefined (a column has zero variance)
    UndefinedCorrelation,
}

// ============================================================================
// Analysis Result
// ============================================================================

/// Marker used wherever an undefined derived value is rendered as text
pub(crate) const UNDEFINED: &str = "undefined";

/// Complete output of one analysis run
///
/// A fresh result is produced per invocation and is read-only to consumers;
/// it offers exactly three projections: the chart-ready [`series`](Self::series)
/// list, the flat [`summary`](Self::summary) table (insertion order is display
/// order), and the row-level [`table`](Self::table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Which analyzer produced this result
    pub mode: ControlType,
    /// Chart-ready plot series, in display order
    pub series: Vec<Series>,
    /// Summary statistics as (label, formatted value), in display order
    pub summary: Vec<(String, String)>,
    /// Input rows augmented with derived fields and classification
    pub rows: RowRecords,
    /// Row-scoped warnings accumulated during analysis
    pub warnings: Vec<QcWarning>,
}

impl AnalysisResult {
    /// Look up a summary value by its label
    pub fn summary_value(&self, label: &str) -> Option<&str> {
        self.summary
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a plot series by its label
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Row-level table projection: column headers plus one string row per
    /// input row, with derived columns. Undefined derived values render as
    /// `"undefined"`.
    pub fn table(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        match &self.rows {
            RowRecords::Standard(rows) => (
                vec![
                    "sample_id",
                    "measured_value",
                    "deviation_percent",
                    "z_score",
                    "status",
                ],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.sample_id.clone(),
                            format!("{}", r.measured_value),
                            fmt_opt(r.deviation_percent),
                            fmt_opt(r.z_score),
                            r.status.to_string(),
                        ]
                    })
                    .collect(),
            ),
            RowRecords::Blank(rows) => (
                vec!["sample_id", "measured_value", "status"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.sample_id.clone(),
                            format!("{}", r.measured_value),
                            r.status.to_string(),
                        ]
                    })
                    .collect(),
            ),
            RowRecords::Duplicate(rows) => (
                vec![
                    "original_value",
                    "duplicate_value",
                    "abs_diff",
                    "rel_diff_percent",
                ],
                rows.iter()
                    .map(|r| {
                        vec![
                            format!("{}", r.original_value),
                            format!("{}", r.duplicate_value),
                            format!("{:.4}", r.abs_diff),
                            fmt_opt(r.rel_diff_percent),
                        ]
                    })
                    .collect(),
            ),
        }
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => UNDEFINED.to_string(),
    }
}
