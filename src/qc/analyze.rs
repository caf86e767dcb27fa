//! Mode dispatch and the current-result slot

use serde::{Deserialize, Serialize};

use super::blank::analyze_blank;
use super::duplicate::analyze_duplicates;
use super::error::AnalysisError;
use super::reference::analyze_reference_standard;
use super::types::{AnalysisResult, ControlType, DuplicatePair, Measurement, ToleranceSpec};

/// One analysis request: cleaned rows plus mode-specific parameters
///
/// One variant per control-chart mode; dispatch is a plain `match`, no dynamic
/// dispatch involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QcRequest {
    /// Certified reference material analysis
    ReferenceStandard {
        rows: Vec<Measurement>,
        reference_value: f64,
        reference_stddev: Option<f64>,
        tolerance: ToleranceSpec,
    },
    /// Blank analysis
    Blank { rows: Vec<Measurement> },
    /// Duplicate-pair analysis
    Duplicates { rows: Vec<DuplicatePair> },
}

impl QcRequest {
    /// The control-chart mode this request selects
    pub fn control_type(&self) -> ControlType {
        match self {
            QcRequest::ReferenceStandard { .. } => ControlType::ReferenceStandard,
            QcRequest::Blank { .. } => ControlType::Blank,
            QcRequest::Duplicates { .. } => ControlType::DuplicatePair,
        }
    }
}

/// Dispatch a request to the analyzer for its mode
///
/// Pure function: identical requests yield identical results, and independent
/// call sites may invoke it concurrently.
pub fn run(request: &QcRequest) -> Result<AnalysisResult, AnalysisError> {
    match request {
        QcRequest::ReferenceStandard {
            rows,
            reference_value,
            reference_stddev,
            tolerance,
        } => analyze_reference_standard(rows, *reference_value, *reference_stddev, tolerance),
        QcRequest::Blank { rows } => analyze_blank(rows),
        QcRequest::Duplicates { rows } => analyze_duplicates(rows),
    }
}

/// Holds the current analysis result between runs
///
/// Each successful [`run`](Self::run) replaces the held result atomically; a
/// failed run leaves the previous result in place and servable. Callers
/// [`invalidate`](Self::invalidate) when upstream parameters (mapping, mode,
/// tolerance) change and the result no longer describes them.
#[derive(Debug, Default)]
pub struct QcSession {
    current: Option<AnalysisResult>,
}

impl QcSession {
    /// Empty session with no result
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a request and store its result, replacing any previous one
    pub fn run(&mut self, request: &QcRequest) -> Result<&AnalysisResult, AnalysisError> {
        let result = run(request)?;
        Ok(self.current.insert(result))
    }

    /// The most recent successful result, if any
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    /// Drop the held result
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}
