//! Record sink contract

use crate::error::{CsvError, CsvResult};

/// A buffered destination for rows of string fields
///
/// Writes may be buffered, so a successful [`write_record`] does not mean
/// the row reached its destination. Call [`flush`] when done and then check
/// [`error`] for anything that went wrong while flushing.
///
/// [`write_record`]: RecordSink::write_record
/// [`flush`]: RecordSink::flush
/// [`error`]: RecordSink::error
pub trait RecordSink {
    /// Write a single record
    fn write_record(&mut self, record: &[String]) -> CsvResult<()>;

    /// Write any buffered data to the underlying destination
    fn flush(&mut self);

    /// The error from the last [`flush`](RecordSink::flush), if any
    fn error(&self) -> Option<&CsvError>;
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn write_record(&mut self, record: &[String]) -> CsvResult<()> {
        (**self).write_record(record)
    }

    fn flush(&mut self) {
        (**self).flush()
    }

    fn error(&self) -> Option<&CsvError> {
        (**self).error()
    }
}
