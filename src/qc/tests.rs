//! Tests for the QC engine
//!
//! Covers limit computation, all three analyzers, and the undefined-value
//! edge cases (zero reference value, zero-sum pairs, degenerate regression).

use approx::assert_relative_eq;

use super::calc;
use super::*;

// ============================================================================
// Test row builders
// ============================================================================

/// Measurements with generated sample ids, in input order
fn measurements(values: &[f64]) -> Vec<Measurement> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Measurement {
            sample_id: format!("S-{:03}", i + 1),
            measured_value: *v,
        })
        .collect()
}

fn pairs(data: &[(f64, f64)]) -> Vec<DuplicatePair> {
    data.iter()
        .map(|(o, d)| DuplicatePair {
            original_value: *o,
            duplicate_value: *d,
        })
        .collect()
}

fn standard_rows(result: &AnalysisResult) -> &[StandardRecord] {
    match &result.rows {
        RowRecords::Standard(rows) => rows,
        other => panic!("expected standard rows, got {other:?}"),
    }
}

fn blank_rows(result: &AnalysisResult) -> &[BlankRecord] {
    match &result.rows {
        RowRecords::Blank(rows) => rows,
        other => panic!("expected blank rows, got {other:?}"),
    }
}

fn duplicate_rows(result: &AnalysisResult) -> &[DuplicateRecord] {
    match &result.rows {
        RowRecords::Duplicate(rows) => rows,
        other => panic!("expected duplicate rows, got {other:?}"),
    }
}

// ============================================================================
// Tolerance limits
// ============================================================================

#[test]
fn test_percentage_limits_bracket_reference() {
    for &reference in &[0.5, 1.0, 12.5, 1000.0] {
        for &pct in &[0.0, 5.0, 10.0, 50.0, 100.0] {
            let spec = ToleranceSpec::Percentage {
                tolerance_percent: pct,
            };
            let limits = compute_limits(reference, None, &spec).unwrap();

            assert!(limits.lower <= reference && reference <= limits.upper);
            assert_relative_eq!(
                limits.upper - limits.lower,
                2.0 * reference * pct / 100.0,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_percentage_limits_zero_reference_is_degenerate_but_valid() {
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 10.0,
    };
    let limits = compute_limits(0.0, None, &spec).unwrap();
    assert_eq!(limits.lower, 0.0);
    assert_eq!(limits.upper, 0.0);
    assert!(limits.contains(0.0));
}

#[test]
fn test_stddev_limits() {
    let spec = ToleranceSpec::StdDevMultiple { multiplier: 2.0 };
    let limits = compute_limits(1.25, Some(0.05), &spec).unwrap();
    assert_relative_eq!(limits.lower, 1.15, max_relative = 1e-12);
    assert_relative_eq!(limits.upper, 1.35, max_relative = 1e-12);
}

#[test]
fn test_stddev_limits_require_positive_stddev() {
    let spec = ToleranceSpec::StdDevMultiple { multiplier: 2.0 };

    assert_eq!(
        compute_limits(1.0, None, &spec),
        Err(ConfigError::StdDevRequired)
    );
    assert_eq!(
        compute_limits(1.0, Some(0.0), &spec),
        Err(ConfigError::NonPositiveStdDev { value: 0.0 })
    );
    assert_eq!(
        compute_limits(1.0, Some(-0.1), &spec),
        Err(ConfigError::NonPositiveStdDev { value: -0.1 })
    );
}

#[test]
fn test_tolerance_display() {
    let pct = ToleranceSpec::Percentage {
        tolerance_percent: 10.0,
    };
    let sd = ToleranceSpec::StdDevMultiple { multiplier: 2.0 };
    assert_eq!(pct.to_string(), "10.00%");
    assert_eq!(sd.to_string(), "2.0 × std dev");
}

// ============================================================================
// Reference-standard analyzer
// ============================================================================

#[test]
fn test_reference_constant_values_all_ok() {
    let rows = measurements(&[1.0, 1.0, 1.0]);
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 0.0,
    };
    let result = analyze_reference_standard(&rows, 1.0, None, &spec).unwrap();

    assert_eq!(result.summary_value("Mean"), Some("1.0000"));
    assert_eq!(result.summary_value("Standard deviation"), Some("0.0000"));
    for row in standard_rows(&result) {
        assert_eq!(row.status, StandardStatus::Ok);
    }
}

#[test]
fn test_reference_status_inclusive_at_limits() {
    // Percentage 10% around 1.0 gives limits [0.9, 1.1]
    let rows = measurements(&[0.9, 1.1, 0.8999999999, 1.1000000001]);
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 10.0,
    };
    let result = analyze_reference_standard(&rows, 1.0, None, &spec).unwrap();
    let rows = standard_rows(&result);

    assert_eq!(rows[0].status, StandardStatus::Ok);
    assert_eq!(rows[1].status, StandardStatus::Ok);
    assert_eq!(rows[2].status, StandardStatus::OutOfLimits);
    assert_eq!(rows[3].status, StandardStatus::OutOfLimits);
}

#[test]
fn test_reference_deviation_and_z_score() {
    let rows = measurements(&[1.30]);
    let spec = ToleranceSpec::StdDevMultiple { multiplier: 2.0 };
    let result = analyze_reference_standard(&rows, 1.25, Some(0.05), &spec).unwrap();
    let row = &standard_rows(&result)[0];

    assert_relative_eq!(row.deviation_percent.unwrap(), 4.0, max_relative = 1e-12);
    assert_relative_eq!(row.z_score.unwrap(), 1.0, max_relative = 1e-12);
    assert_eq!(row.status, StandardStatus::Ok);
    assert_eq!(result.summary_value("Reference std dev"), Some("0.0500"));
}

#[test]
fn test_reference_zero_reference_value_marks_deviation_undefined() {
    let rows = measurements(&[0.0, 0.1]);
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 10.0,
    };
    let result = analyze_reference_standard(&rows, 0.0, None, &spec).unwrap();

    for row in standard_rows(&result) {
        assert_eq!(row.deviation_percent, None);
    }
    assert_eq!(result.warnings.len(), 2);
    assert!(matches!(
        result.warnings[0],
        QcWarning::UndefinedDeviation { .. }
    ));
}

#[test]
fn test_reference_z_score_omitted_without_stddev() {
    let rows = measurements(&[1.0]);
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 10.0,
    };

    let without = analyze_reference_standard(&rows, 1.0, None, &spec).unwrap();
    assert_eq!(standard_rows(&without)[0].z_score, None);
    assert_eq!(without.summary_value("Reference std dev"), None);

    let zero_sd = analyze_reference_standard(&rows, 1.0, Some(0.0), &spec).unwrap();
    assert_eq!(standard_rows(&zero_sd)[0].z_score, None);
}

#[test]
fn test_reference_config_error_before_statistics() {
    // Invalid tolerance configuration must surface even with rows present
    let rows = measurements(&[1.0, 2.0]);
    let spec = ToleranceSpec::StdDevMultiple { multiplier: 2.0 };
    let err = analyze_reference_standard(&rows, 1.0, None, &spec).unwrap_err();
    assert_eq!(err, AnalysisError::Config(ConfigError::StdDevRequired));
}

#[test]
fn test_reference_series_layout() {
    let rows = measurements(&[1.0, 1.2, 0.8]);
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 25.0,
    };
    let result = analyze_reference_standard(&rows, 1.0, None, &spec).unwrap();

    let labels: Vec<&str> = result.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Measured value", "Reference value", "Upper limit", "Lower limit"]
    );
    for series in &result.series {
        assert_eq!(series.points.len(), 3);
    }
    assert_eq!(result.series("Upper limit").unwrap().points[1], (1.0, 1.25));
    // Measured values keep original row order
    assert_eq!(
        result.series("Measured value").unwrap().points,
        vec![(0.0, 1.0), (1.0, 1.2), (2.0, 0.8)]
    );
}

#[test]
fn test_reference_empty_input() {
    let spec = ToleranceSpec::Percentage {
        tolerance_percent: 10.0,
    };
    let err = analyze_reference_standard(&[], 1.0, None, &spec).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { .. }));
}

// ============================================================================
// Blank analyzer
// ============================================================================

#[test]
fn test_blank_constant_values() {
    let rows = measurements(&[1.0, 1.0, 1.0, 1.0]);
    let result = analyze_blank(&rows).unwrap();

    assert_eq!(result.summary_value("Mean"), Some("1.0000"));
    assert_eq!(result.summary_value("Standard deviation"), Some("0.0000"));
    assert_eq!(
        result.summary_value("Estimated detection limit (LOD)"),
        Some("1.0000")
    );
    for row in blank_rows(&result) {
        assert_eq!(row.status, BlankStatus::Ok);
    }
}

#[test]
fn test_blank_lod_is_mean_plus_three_sigma() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let rows = measurements(&values);
    let result = analyze_blank(&rows).unwrap();

    // mean = 2.5, population sd = sqrt(1.25)
    let lod = 2.5 + 3.0 * 1.25f64.sqrt();
    let lod_series = result.series("Detection limit (LOD)").unwrap();
    for (_, y) in &lod_series.points {
        assert_relative_eq!(*y, lod, max_relative = 1e-12);
    }
}

#[test]
fn test_blank_boundary_is_inclusive() {
    // mean = 2.0, sd = 0 for the first run: value == lod stays OK
    let rows = measurements(&[2.0, 2.0]);
    let result = analyze_blank(&rows).unwrap();
    assert!(blank_rows(&result)
        .iter()
        .all(|r| r.status == BlankStatus::Ok));

    // A single outlier among eleven points sits at z = sqrt(10) > 3: Elevated
    let mut values = vec![1.0; 10];
    values.push(10.0);
    let result = analyze_blank(&measurements(&values)).unwrap();
    let rows = blank_rows(&result);
    assert_eq!(rows[10].status, BlankStatus::Elevated);
    assert!(rows[..10].iter().all(|r| r.status == BlankStatus::Ok));
}

#[test]
fn test_blank_single_row_is_ok() {
    let rows = measurements(&[0.7]);
    let result = analyze_blank(&rows).unwrap();
    assert_eq!(blank_rows(&result)[0].status, BlankStatus::Ok);
}

#[test]
fn test_blank_empty_input() {
    let err = analyze_blank(&[]).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { .. }));
}

// ============================================================================
// Duplicate-pair analyzer
// ============================================================================

#[test]
fn test_duplicates_identity_pairs() {
    let rows = pairs(&[(2.0, 2.0), (4.0, 4.0)]);
    let result = analyze_duplicates(&rows).unwrap();

    assert_eq!(
        result.summary_value("Regression equation"),
        Some("y = 1.0000x + 0.0000")
    );
    assert_eq!(
        result.summary_value("Coefficient of determination (R²)"),
        Some("1.0000")
    );
    assert_eq!(result.summary_value("Mean absolute difference"), Some("0.0000"));
    assert_eq!(result.summary_value("Mean relative difference"), Some("0.00%"));
}

#[test]
fn test_duplicates_row_derived_fields() {
    let rows = pairs(&[(2.0, 2.5), (4.0, 3.0)]);
    let result = analyze_duplicates(&rows).unwrap();
    let records = duplicate_rows(&result);

    assert_relative_eq!(records[0].abs_diff, 0.5, max_relative = 1e-12);
    // |2.5 - 2.0| / 2.25 * 100
    assert_relative_eq!(
        records[0].rel_diff_percent.unwrap(),
        100.0 * 0.5 / 2.25,
        max_relative = 1e-12
    );
    assert_relative_eq!(records[1].abs_diff, 1.0, max_relative = 1e-12);
}

#[test]
fn test_duplicates_zero_sum_pair_excluded_from_relative_mean() {
    let rows = pairs(&[(-1.0, 1.0), (2.0, 2.0), (4.0, 4.0)]);
    let result = analyze_duplicates(&rows).unwrap();
    let records = duplicate_rows(&result);

    assert_eq!(records[0].rel_diff_percent, None);
    assert!(result
        .warnings
        .contains(&QcWarning::UndefinedRelativeDiff { index: 0 }));

    // abs mean counts the zero-sum pair: (2 + 0 + 0) / 3
    assert_eq!(
        result.summary_value("Mean absolute difference"),
        Some("0.6667")
    );
    // relative mean excludes it: (0 + 0) / 2
    assert_eq!(result.summary_value("Mean relative difference"), Some("0.00%"));
}

#[test]
fn test_duplicates_degenerate_regression() {
    let rows = pairs(&[(2.0, 2.1), (2.0, 1.9), (2.0, 2.0)]);
    let err = analyze_duplicates(&rows).unwrap_err();
    assert_eq!(err, AnalysisError::DegenerateRegression { distinct_x: 1 });

    let err = analyze_duplicates(&pairs(&[(3.0, 3.1)])).unwrap_err();
    assert_eq!(err, AnalysisError::DegenerateRegression { distinct_x: 1 });
}

#[test]
fn test_duplicates_empty_input_distinct_from_degenerate() {
    let err = analyze_duplicates(&[]).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { .. }));
}

#[test]
fn test_duplicates_undefined_correlation() {
    // Duplicate column is constant while originals vary: r is a 0/0 form
    let rows = pairs(&[(1.0, 2.0), (2.0, 2.0), (3.0, 2.0)]);
    let result = analyze_duplicates(&rows).unwrap();

    assert_eq!(
        result.summary_value("Coefficient of determination (R²)"),
        Some("undefined")
    );
    assert!(result.warnings.contains(&QcWarning::UndefinedCorrelation));
    assert_eq!(
        result.summary_value("Regression equation"),
        Some("y = 0.0000x + 2.0000")
    );
}

#[test]
fn test_duplicates_series_layout() {
    let rows = pairs(&[(1.0, 1.1), (2.0, 1.9), (3.0, 3.2)]);
    let result = analyze_duplicates(&rows).unwrap();

    let scatter = result.series("Duplicate pairs").unwrap();
    assert_eq!(scatter.points, vec![(1.0, 1.1), (2.0, 1.9), (3.0, 3.2)]);

    let regression = result.series("Regression line").unwrap();
    let identity = result.series("Identity line (y = x)").unwrap();
    assert_eq!(regression.points.len(), 100);
    assert_eq!(identity.points.len(), 100);
    assert_eq!(regression.points[0].0, 1.0);
    assert_eq!(regression.points[99].0, 3.0);
    for (x, y) in &identity.points {
        assert_eq!(x, y);
    }
}

// ============================================================================
// Calculation helpers
// ============================================================================

#[test]
fn test_population_std_dev() {
    // np.std of [1, 2, 3, 4] (divide by N) is sqrt(1.25)
    let sd = calc::std_dev_pop(&[1.0, 2.0, 3.0, 4.0]);
    assert_relative_eq!(sd, 1.25f64.sqrt(), max_relative = 1e-12);
}

#[test]
fn test_linear_fit_known_line() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [3.0, 5.0, 7.0, 9.0];
    let fit = calc::linear_fit(&x, &y).unwrap();
    assert_relative_eq!(fit.slope, 2.0, max_relative = 1e-12);
    assert_relative_eq!(fit.intercept, 1.0, max_relative = 1e-12);
}

#[test]
fn test_pearson_r_sign() {
    let x = [1.0, 2.0, 3.0];
    let up = [2.0, 4.0, 6.0];
    let down = [6.0, 4.0, 2.0];
    assert_relative_eq!(calc::pearson_r(&x, &up).unwrap(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(
        calc::pearson_r(&x, &down).unwrap(),
        -1.0,
        max_relative = 1e-12
    );
    assert_eq!(calc::pearson_r(&x, &[5.0, 5.0, 5.0]), None);
}

#[test]
fn test_linspace_endpoints() {
    let xs = calc::linspace(1.0, 3.0, 5);
    assert_eq!(xs, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
}

// ============================================================================
// Dispatch, session, and idempotence
// ============================================================================

#[test]
fn test_run_dispatches_by_mode() {
    let request = QcRequest::Blank {
        rows: measurements(&[1.0, 1.2]),
    };
    assert_eq!(request.control_type(), ControlType::Blank);
    let result = run(&request).unwrap();
    assert_eq!(result.mode, ControlType::Blank);
}

#[test]
fn test_analyzers_are_idempotent() {
    let request = QcRequest::ReferenceStandard {
        rows: measurements(&[1.24, 1.18, 1.31, 1.22]),
        reference_value: 1.25,
        reference_stddev: Some(0.05),
        tolerance: ToleranceSpec::StdDevMultiple { multiplier: 2.0 },
    };
    assert_eq!(run(&request).unwrap(), run(&request).unwrap());

    let request = QcRequest::Duplicates {
        rows: pairs(&[(2.45, 2.38), (3.18, 3.26), (1.76, 1.70)]),
    };
    assert_eq!(run(&request).unwrap(), run(&request).unwrap());
}

#[test]
fn test_session_replaces_result_only_on_success() {
    let mut session = QcSession::new();
    assert!(session.current().is_none());

    let blank = QcRequest::Blank {
        rows: measurements(&[1.0, 1.1]),
    };
    session.run(&blank).unwrap();
    assert_eq!(session.current().unwrap().mode, ControlType::Blank);

    // A failed run leaves the previous result servable
    let failing = QcRequest::Duplicates { rows: Vec::new() };
    assert!(session.run(&failing).is_err());
    assert_eq!(session.current().unwrap().mode, ControlType::Blank);

    session.invalidate();
    assert!(session.current().is_none());
}

#[test]
fn test_required_fields_per_mode() {
    assert_eq!(
        ControlType::ReferenceStandard.required_fields(),
        ["sample_id", "measured_value"]
    );
    assert_eq!(
        ControlType::Blank.required_fields(),
        ["sample_id", "measured_value"]
    );
    assert_eq!(
        ControlType::DuplicatePair.required_fields(),
        ["original_value", "duplicate_value"]
    );
}

#[test]
fn test_table_projection_marks_undefined() {
    let rows = pairs(&[(-1.0, 1.0), (2.0, 2.2)]);
    let result = analyze_duplicates(&rows).unwrap();
    let (headers, table) = result.table();

    assert_eq!(
        headers,
        ["original_value", "duplicate_value", "abs_diff", "rel_diff_percent"]
    );
    assert_eq!(table[0][3], "undefined");
    assert_eq!(table[1][2], "0.2000");
}
