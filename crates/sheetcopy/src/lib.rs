//! # sheetcopy
//!
//! Copy spreadsheet values into CSV, and work with A1-style addresses.
//!
//! ## Features
//!
//! - Parse, format, measure and move cell addresses and ranges
//!   (re-exported from `sheetcopy-core`)
//! - Extract spreadsheet ids from sharing links
//! - Copy string values from any [`ValueSource`] into any [`RecordSink`]
//!
//! ## Example
//!
//! ```rust
//! use sheetcopy::prelude::*;
//! use serde_json::json;
//!
//! struct Fixed;
//!
//! impl ValueSource for Fixed {
//!     fn values(&self, _id: &str, _range: &str) -> sheetcopy::Result<ValueRange> {
//!         Ok(ValueRange::from_rows(vec![vec![json!("a"), json!("b")]]))
//!     }
//! }
//!
//! let mut sink = CsvSink::new(Vec::new(), &CsvWriteOptions::default());
//! let stats = copy(&mut sink, &Fixed, "sheet-id", "A1:B1").unwrap();
//! assert_eq!(stats.rows, 1);
//! assert_eq!(sink.into_inner().unwrap(), b"a,b\r\n");
//! ```

pub mod copy;
pub mod error;
pub mod id;
pub mod prelude;
pub mod source;

pub use copy::{copy, CopyStats};
pub use error::{Error, Result};
pub use id::{spreadsheet_id, IdError};
pub use source::{JsonValueSource, ValueRange, ValueSource};

// Re-export core types
pub use sheetcopy_core::{column, CellAddress, CellRange, MAX_COLS, MAX_ROWS};

// Re-export sink types
pub use sheetcopy_csv::{
    CsvError, CsvResult, CsvSink, CsvWriteOptions, LineTerminator, QuoteStyle, RecordSink,
};
