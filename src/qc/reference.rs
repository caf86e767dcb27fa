//! Reference-standard (CRM) control-chart analyzer

use super::calc;
use super::error::AnalysisError;
use super::limits::compute_limits;
use super::types::{
    AnalysisResult, ControlType, Measurement, QcWarning, RowRecords, Series, StandardRecord,
    StandardStatus, ToleranceSpec,
};

/// Build the control chart, classification, and summary statistics for
/// certified reference material data
///
/// The tolerance is resolved to limits first (an invalid configuration aborts
/// before any statistic is computed), then every row is classified against the
/// inclusive limit bounds. `deviation_percent` is undefined when the reference
/// value is zero; `z_score` is reported only when a positive reference std dev
/// is available.
pub fn analyze_reference_standard(
    rows: &[Measurement],
    reference_value: f64,
    reference_stddev: Option<f64>,
    spec: &ToleranceSpec,
) -> Result<AnalysisResult, AnalysisError> {
    let limits = compute_limits(reference_value, reference_stddev, spec)?;

    if rows.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: "reference-standard analysis".to_string(),
        });
    }

    let values: Vec<f64> = rows.iter().map(|r| r.measured_value).collect();
    let mean = calc::mean(&values);
    let std_dev = calc::std_dev_pop(&values);
    let min = calc::min(&values);
    let max = calc::max(&values);

    let n = rows.len();
    let series = vec![
        Series::new(
            "Measured value",
            values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect(),
        ),
        Series::constant("Reference value", n, reference_value),
        Series::constant("Upper limit", n, limits.upper),
        Series::constant("Lower limit", n, limits.lower),
    ];

    let z_denominator = reference_stddev.filter(|sd| *sd > 0.0);
    let mut warnings = Vec::new();
    let records: Vec<StandardRecord> = rows
        .iter()
        .map(|r| {
            let deviation_percent = if reference_value != 0.0 {
                Some((r.measured_value - reference_value) / reference_value * 100.0)
            } else {
                warnings.push(QcWarning::UndefinedDeviation {
                    sample_id: r.sample_id.clone(),
                });
                None
            };
            let z_score = z_denominator.map(|sd| (r.measured_value - reference_value) / sd);
            let status = if limits.contains(r.measured_value) {
                StandardStatus::Ok
            } else {
                StandardStatus::OutOfLimits
            };
            StandardRecord {
                sample_id: r.sample_id.clone(),
                measured_value: r.measured_value,
                deviation_percent,
                z_score,
                status,
            }
        })
        .collect();

    let mut summary = vec![
        ("Reference value".to_string(), format!("{reference_value:.4}")),
        ("Mean".to_string(), format!("{mean:.4}")),
        ("Standard deviation".to_string(), format!("{std_dev:.4}")),
        ("Min".to_string(), format!("{min:.4}")),
        ("Max".to_string(), format!("{max:.4}")),
    ];
    if let Some(sd) = z_denominator {
        summary.push(("Reference std dev".to_string(), format!("{sd:.4}")));
    }
    summary.push(("Tolerance".to_string(), spec.to_string()));

    Ok(AnalysisResult {
        mode: ControlType::ReferenceStandard,
        series,
        summary,
        rows: RowRecords::Standard(records),
        warnings,
    })
}
