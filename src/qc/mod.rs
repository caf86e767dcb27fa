//! QC statistics and control-limit engine for assay control samples
//!
//! This module turns mapped tabular input into control-chart series, pass/fail
//! classification, and summary statistics for the three supported control
//! types. Analyzers are pure functions over already-cleaned rows; everything
//! they produce lands in a single [`AnalysisResult`].
//!
//! # Control types
//!
//! | Mode | Input rows | Classification |
//! |------|------------|----------------|
//! | Reference standard (CRM) | `{sample_id, measured_value}` | `Ok` / `OutOfLimits` against tolerance limits |
//! | Blank | `{sample_id, measured_value}` | `Ok` / `Elevated` against `lod = mean + 3σ` |
//! | Duplicate pair | `{original_value, duplicate_value}` | no pass/fail, paired deltas only |
//!
//! # Usage
//!
//! ```rust,ignore
//! use geoqc::qc::{analyze_reference_standard, Measurement, ToleranceSpec};
//!
//! let rows = vec![
//!     Measurement { sample_id: "CRM-001".into(), measured_value: 1.24 },
//!     Measurement { sample_id: "CRM-002".into(), measured_value: 1.18 },
//! ];
//! let spec = ToleranceSpec::Percentage { tolerance_percent: 10.0 };
//!
//! let result = analyze_reference_standard(&rows, 1.25, Some(0.05), &spec)?;
//! println!("mean: {:?}", result.summary_value("Mean"));
//! ```
//!
//! # Invariants
//!
//! - Statistics use the population standard deviation (divide by N).
//! - All status boundaries are inclusive: a value exactly on a control limit
//!   or exactly at the LOD classifies as `Ok`.
//! - Undefined derived values (zero-denominator ratios) are `None` plus a
//!   [`QcWarning`], never NaN, and aggregates exclude them.
//! - Empty cleaned input is an error ([`AnalysisError::EmptyInput`]), never a
//!   fabricated zero statistic.

// Internal modules
mod analyze;
mod blank;
mod calc;
mod clean;
mod duplicate;
mod error;
mod limits;
mod reference;
mod types;

#[cfg(test)]
mod tests;

// Public API
pub use analyze::{run, QcRequest, QcSession};
pub use blank::analyze_blank;
pub use clean::{clean_measurements, clean_pairs};
pub use duplicate::analyze_duplicates;
pub use error::{AnalysisError, ConfigError};
pub use limits::compute_limits;
pub use reference::analyze_reference_standard;
pub use types::{
    AnalysisResult, BlankRecord, BlankStatus, ControlLimits, ControlType, DuplicatePair,
    DuplicateRecord, Measurement, QcWarning, RowRecords, Series, StandardRecord, StandardStatus,
    ToleranceSpec,
};
