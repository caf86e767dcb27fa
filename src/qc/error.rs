//! QC error types

use thiserror::Error;

/// Invalid tolerance configuration, surfaced before any computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Std-dev-multiple tolerance selected without a reference std dev
    #[error("tolerance in standard deviations requires a reference standard deviation")]
    StdDevRequired,

    /// Reference std dev present but not usable
    #[error("reference standard deviation must be positive (got {value})")]
    NonPositiveStdDev { value: f64 },
}

/// Errors that abort an analysis run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid tolerance configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required mapped column is absent from the input table
    #[error("column '{name}' not found in mapped table")]
    MissingColumn { name: String },

    /// Zero valid rows remain after numeric coercion
    #[error("no valid numeric rows remain after cleaning ({context})")]
    EmptyInput { context: String },

    /// Duplicate-pair regression cannot be fitted
    #[error("regression is degenerate: need at least 2 distinct original values, found {distinct_x}")]
    DegenerateRegression { distinct_x: usize },
}
