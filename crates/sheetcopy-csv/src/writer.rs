//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvWriteOptions;
use crate::sink::RecordSink;

/// [`RecordSink`] that writes CSV through the `csv` crate
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    error: Option<CsvError>,
    records: usize,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file
    pub fn create<P: AsRef<Path>>(path: P, options: &CsvWriteOptions) -> CsvResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file, options))
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer
    pub fn new(writer: W, options: &CsvWriteOptions) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(options.quote_style.to_csv())
            .terminator(options.line_terminator.to_csv())
            .flexible(!options.strict_width)
            .from_writer(writer);

        Self {
            writer,
            error: None,
            records: 0,
        }
    }

    /// Number of records accepted so far
    pub fn records_written(&self) -> usize {
        self.records
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> CsvResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| CsvError::Io(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &[String]) -> CsvResult<()> {
        self.writer.write_record(record)?;
        self.records += 1;
        Ok(())
    }

    fn flush(&mut self) {
        self.error = self.writer.flush().err().map(CsvError::Io);
    }

    fn error(&self) -> Option<&CsvError> {
        self.error.as_ref()
    }
}
