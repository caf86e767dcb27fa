pub mod data;
pub mod error;
pub mod qc;
pub mod report;

pub use crate::data::{ColumnMapping, Table};
pub use crate::qc::{
    analyze_blank, analyze_duplicates, analyze_reference_standard, compute_limits, AnalysisResult,
    ControlLimits, ControlType, DuplicatePair, Measurement, QcRequest, QcSession, ToleranceSpec,
};
pub use error::GeoQcError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            detect_delimiter, read_path, read_str, ColumnMapping, MappingError, Table, TableError,
        };
    }
    pub mod qc {
        pub use crate::qc::{
            analyze_blank, analyze_duplicates, analyze_reference_standard, clean_measurements,
            clean_pairs, compute_limits, run, AnalysisError, AnalysisResult, BlankStatus,
            ConfigError, ControlLimits, ControlType, DuplicatePair, Measurement, QcRequest,
            QcSession, QcWarning, RowRecords, Series, StandardStatus, ToleranceSpec,
        };
    }
    pub mod report {
        pub use crate::report::{rows_to_csv, summary_to_csv, to_json, ReportError};
    }

    pub use crate::error::GeoQcError;
    pub use crate::qc::*;
}
