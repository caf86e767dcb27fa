//! Pure calculation functions shared by the analyzers
//!
//! All functions are stateless and take validated (non-empty, finite) input;
//! emptiness is checked by the analyzers before any statistic is computed.

/// Arithmetic mean. Caller guarantees non-empty input.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N, not N-1).
///
/// Matches the descriptive-statistics convention used throughout the crate;
/// all numeric test vectors depend on it. Caller guarantees non-empty input.
pub fn std_dev_pop(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Minimum value. Caller guarantees non-empty input.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum value. Caller guarantees non-empty input.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Ordinary least-squares fit of `y` on `x`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Predicted y at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// OLS linear fit of `y` on `x`
///
/// Returns `None` when the fit is degenerate (zero x-variance, which includes
/// fewer than 2 points); the slope would be undefined or infinite.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let mx = mean(x);
    let my = mean(y);

    let sxx: f64 = x.iter().map(|xi| (xi - mx) * (xi - mx)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - mx) * (yi - my)).sum();

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

/// Pearson correlation coefficient between `x` and `y`
///
/// Returns `None` when either column has zero variance; the coefficient is
/// then a 0/0 form and must not be threaded into aggregates as NaN.
pub fn pearson_r(x: &[f64], y: &[f64]) -> Option<f64> {
    let mx = mean(x);
    let my = mean(y);

    let sxx: f64 = x.iter().map(|xi| (xi - mx) * (xi - mx)).sum();
    let syy: f64 = y.iter().map(|yi| (yi - my) * (yi - my)).sum();
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    let sxy: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - mx) * (yi - my)).sum();

    Some(sxy / (sxx * syy).sqrt())
}

/// Number of distinct values (by exact bit comparison after total ordering)
pub fn distinct_count(values: &[f64]) -> usize {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup_by(|a, b| a == b);
    sorted.len()
}

/// `n` evenly spaced values from `start` to `end` inclusive
///
/// Caller guarantees `n >= 2`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let span = end - start;
    (0..n)
        .map(|i| start + span * i as f64 / (n - 1) as f64)
        .collect()
}
