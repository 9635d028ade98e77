//! # sheetcopy-csv
//!
//! Record sinks for sheetcopy.
//!
//! [`RecordSink`] is the contract the copy utility writes rows into;
//! [`CsvSink`] implements it on top of the `csv` crate.

mod error;
mod options;
mod sink;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvWriteOptions, LineTerminator, QuoteStyle};
pub use sink::RecordSink;
pub use writer::CsvSink;
