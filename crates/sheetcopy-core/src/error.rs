//! Error types for sheetcopy-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or moving addresses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Column letters decode past the last column
    #[error("Column '{0}' out of range (max: XFD)")]
    ColumnOutOfRange(String),

    /// Row suffix is not a usable row number
    #[error("Invalid row number in '{0}'")]
    InvalidRow(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds after a move
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(i64, u32),

    /// Column index out of bounds after a move
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(i64, u16),
}
