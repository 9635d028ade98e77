//! Prelude module - common imports for sheetcopy users
//!
//! ```rust
//! use sheetcopy::prelude::*;
//! ```

pub use crate::{
    // Copy
    copy,
    spreadsheet_id,
    // Address types
    CellAddress,
    CellRange,
    CopyStats,
    // Sinks
    CsvSink,
    CsvWriteOptions,
    // Error types
    Error,
    // Sources
    JsonValueSource,
    RecordSink,
    Result,
    ValueRange,
    ValueSource,
};
