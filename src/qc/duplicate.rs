//! Duplicate-pair analyzer: regression, correlation, and paired differences

use super::calc;
use super::error::AnalysisError;
use super::types::{
    AnalysisResult, ControlType, DuplicatePair, DuplicateRecord, QcWarning, RowRecords, Series,
    UNDEFINED,
};

/// Points sampled along the regression and identity lines
const LINE_SAMPLES: usize = 100;

/// Build regression, correlation, and paired-difference statistics for
/// duplicate sample data
///
/// Fits duplicate on original by ordinary least squares and reports the fit
/// alongside R², the mean absolute difference, and the mean relative
/// difference. A pair whose mean is zero has an undefined relative difference:
/// the row is marked, excluded from the relative mean, and still counted in
/// the absolute mean. Fewer than 2 distinct original values make the fit
/// degenerate and the analysis fails.
pub fn analyze_duplicates(rows: &[DuplicatePair]) -> Result<AnalysisResult, AnalysisError> {
    if rows.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: "duplicate-pair analysis".to_string(),
        });
    }

    let x: Vec<f64> = rows.iter().map(|r| r.original_value).collect();
    let y: Vec<f64> = rows.iter().map(|r| r.duplicate_value).collect();

    let fit = calc::linear_fit(&x, &y).ok_or_else(|| AnalysisError::DegenerateRegression {
        distinct_x: calc::distinct_count(&x),
    })?;
    let r = calc::pearson_r(&x, &y);

    let mut warnings = Vec::new();
    if r.is_none() {
        warnings.push(QcWarning::UndefinedCorrelation);
    }

    let records: Vec<DuplicateRecord> = rows
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let abs_diff = (pair.duplicate_value - pair.original_value).abs();
            let pair_mean = (pair.original_value + pair.duplicate_value) / 2.0;
            let rel_diff_percent = if pair_mean != 0.0 {
                Some(abs_diff / pair_mean * 100.0)
            } else {
                warnings.push(QcWarning::UndefinedRelativeDiff { index });
                None
            };
            DuplicateRecord {
                original_value: pair.original_value,
                duplicate_value: pair.duplicate_value,
                abs_diff,
                rel_diff_percent,
            }
        })
        .collect();

    let abs_diffs: Vec<f64> = records.iter().map(|r| r.abs_diff).collect();
    let mean_abs_diff = calc::mean(&abs_diffs);
    let defined_rel: Vec<f64> = records.iter().filter_map(|r| r.rel_diff_percent).collect();
    let mean_rel_diff = if defined_rel.is_empty() {
        None
    } else {
        Some(calc::mean(&defined_rel))
    };

    let x_range = calc::linspace(calc::min(&x), calc::max(&x), LINE_SAMPLES);
    let series = vec![
        Series::new(
            "Duplicate pairs",
            x.iter().zip(&y).map(|(xi, yi)| (*xi, *yi)).collect(),
        ),
        Series::new(
            "Regression line",
            x_range.iter().map(|xi| (*xi, fit.predict(*xi))).collect(),
        ),
        Series::new(
            "Identity line (y = x)",
            x_range.iter().map(|xi| (*xi, *xi)).collect(),
        ),
    ];

    let summary = vec![
        (
            "Regression equation".to_string(),
            format!("y = {:.4}x + {:.4}", fit.slope, fit.intercept),
        ),
        (
            "Coefficient of determination (R²)".to_string(),
            match r {
                Some(r) => format!("{:.4}", r * r),
                None => UNDEFINED.to_string(),
            },
        ),
        (
            "Mean absolute difference".to_string(),
            format!("{mean_abs_diff:.4}"),
        ),
        (
            "Mean relative difference".to_string(),
            match mean_rel_diff {
                Some(v) => format!("{v:.2}%"),
                None => UNDEFINED.to_string(),
            },
        ),
    ];

    Ok(AnalysisResult {
        mode: ControlType::DuplicatePair,
        series,
        summary,
        rows: RowRecords::Duplicate(records),
        warnings,
    })
}
