//! Blank-sample control-chart analyzer with detection-limit estimation

use super::calc;
use super::error::AnalysisError;
use super::types::{
    AnalysisResult, BlankRecord, BlankStatus, ControlType, Measurement, RowRecords, Series,
};

/// Fixed detection-limit multiplier: `lod = mean + 3 * std_dev`
const LOD_MULTIPLIER: f64 = 3.0;

/// Build the control chart, classification, and summary statistics for blank
/// sample data
///
/// The limit of detection is estimated as `mean + 3 * std_dev` over the blank
/// measurements (population std dev). A value exactly equal to the LOD is
/// `Ok`; the boundary is inclusive. With a single row the std dev is zero, so
/// the LOD equals the mean and the row classifies as `Ok`.
pub fn analyze_blank(rows: &[Measurement]) -> Result<AnalysisResult, AnalysisError> {
    if rows.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: "blank analysis".to_string(),
        });
    }

    let values: Vec<f64> = rows.iter().map(|r| r.measured_value).collect();
    let mean = calc::mean(&values);
    let std_dev = calc::std_dev_pop(&values);
    let min = calc::min(&values);
    let max = calc::max(&values);
    let lod = mean + LOD_MULTIPLIER * std_dev;

    let n = rows.len();
    let series = vec![
        Series::new(
            "Measured value",
            values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect(),
        ),
        Series::constant("Mean", n, mean),
        Series::constant("Detection limit (LOD)", n, lod),
    ];

    let records: Vec<BlankRecord> = rows
        .iter()
        .map(|r| BlankRecord {
            sample_id: r.sample_id.clone(),
            measured_value: r.measured_value,
            status: if r.measured_value <= lod {
                BlankStatus::Ok
            } else {
                BlankStatus::Elevated
            },
        })
        .collect();

    let summary = vec![
        ("Mean".to_string(), format!("{mean:.4}")),
        ("Standard deviation".to_string(), format!("{std_dev:.4}")),
        ("Min".to_string(), format!("{min:.4}")),
        ("Max".to_string(), format!("{max:.4}")),
        (
            "Estimated detection limit (LOD)".to_string(),
            format!("{lod:.4}"),
        ),
    ];

    Ok(AnalysisResult {
        mode: ControlType::Blank,
        series,
        summary,
        rows: RowRecords::Blank(records),
        warnings: Vec::new(),
    })
}
