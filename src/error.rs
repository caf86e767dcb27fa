use thiserror::Error;

use crate::data::{MappingError, TableError};
use crate::qc::AnalysisError;
use crate::report::ReportError;

/// Any error the ingest → map → analyze → export pipeline can surface
#[derive(Error, Debug)]
pub enum GeoQcError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
