//! Tolerance-limit calculator

use super::error::ConfigError;
use super::types::{ControlLimits, ToleranceSpec};

/// Derive control limits from a reference value and a tolerance specification
///
/// - [`ToleranceSpec::Percentage`]: `reference_value * (1 ± p/100)`. A zero
///   reference value yields the degenerate but valid `lower = upper = 0`.
/// - [`ToleranceSpec::StdDevMultiple`]: `reference_value ± m * reference_stddev`;
///   fails with a [`ConfigError`] when the reference std dev is absent, zero,
///   or negative, and no limits are computed.
pub fn compute_limits(
    reference_value: f64,
    reference_stddev: Option<f64>,
    spec: &ToleranceSpec,
) -> Result<ControlLimits, ConfigError> {
    match *spec {
        ToleranceSpec::Percentage { tolerance_percent } => {
            let tolerance = tolerance_percent / 100.0;
            Ok(ControlLimits {
                lower: reference_value * (1.0 - tolerance),
                upper: reference_value * (1.0 + tolerance),
            })
        }
        ToleranceSpec::StdDevMultiple { multiplier } => {
            let sd = reference_stddev.ok_or(ConfigError::StdDevRequired)?;
            if sd <= 0.0 {
                return Err(ConfigError::NonPositiveStdDev { value: sd });
            }
            Ok(ControlLimits {
                lower: reference_value - multiplier * sd,
                upper: reference_value + multiplier * sd,
            })
        }
    }
}
