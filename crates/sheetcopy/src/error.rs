//! Error types for sheetcopy

use sheetcopy_core::{CellAddress, CellRange};
use sheetcopy_csv::CsvError;
use thiserror::Error;

use crate::id::IdError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from fetching and copying spreadsheet values
#[derive(Debug, Error)]
pub enum Error {
    /// Address or range error
    #[error(transparent)]
    Core(#[from] sheetcopy_core::Error),

    /// Spreadsheet link error
    #[error(transparent)]
    Id(#[from] IdError),

    /// The sink rejected a record
    #[error("copy: {0}")]
    Sink(#[source] CsvError),

    /// The sink reported an error after flushing
    #[error("copy: flush failed: {0}")]
    Flush(String),

    /// A cell held something other than a string
    #[error("copy: unable to cast value {value} at {cell} to a string")]
    NonStringValue { cell: CellAddress, value: String },

    /// The requested range is not covered by the stored values
    #[error("Range {requested} is outside the stored values {stored}")]
    OutsideStoredRange {
        requested: CellRange,
        stored: CellRange,
    },

    /// The source has nothing stored for this spreadsheet
    #[error("No values stored for spreadsheet '{0}'")]
    SourceNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed value document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
