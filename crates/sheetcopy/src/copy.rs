//! Copying spreadsheet values into a record sink

use serde_json::Value;
use sheetcopy_csv::RecordSink;

use crate::error::{Error, Result};
use crate::source::ValueSource;

/// What a [`copy`] call wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Records written
    pub rows: usize,
    /// Fields written across all records
    pub cells: usize,
}

/// Copy the values of `range` in spreadsheet `id` from `src` into `dst`
///
/// Every value must be a JSON string; the first one that is not aborts the
/// copy with [`Error::NonStringValue`] naming its cell. The sink is flushed
/// once all rows are written and its error, if any, is returned.
pub fn copy<S, V>(dst: &mut S, src: &V, id: &str, range: &str) -> Result<CopyStats>
where
    S: RecordSink + ?Sized,
    V: ValueSource + ?Sized,
{
    let resp = src.values(id, range)?;
    if resp.values.is_empty() {
        log::warn!("copy: no values in '{}' for spreadsheet {}", range, id);
    }

    let origin = resp.origin();
    let mut stats = CopyStats::default();
    let mut row: Vec<String> = Vec::new();

    for (r, vals) in resp.values.iter().enumerate() {
        if row.capacity() == 0 {
            row.reserve(vals.len() + vals.len() / 4);
        }
        row.clear();

        for (c, val) in vals.iter().enumerate() {
            match val {
                Value::String(s) => row.push(s.clone()),
                other => {
                    return Err(Error::NonStringValue {
                        cell: origin.offset(r as i32, c as i32),
                        value: other.to_string(),
                    })
                }
            }
        }

        dst.write_record(&row).map_err(Error::Sink)?;
        stats.rows += 1;
        stats.cells += row.len();
    }

    dst.flush();
    if let Some(err) = dst.error() {
        return Err(Error::Flush(err.to_string()));
    }

    log::debug!(
        "copy: wrote {} rows ({} cells) from spreadsheet {}",
        stats.rows,
        stats.cells,
        id
    );
    Ok(stats)
}
