//! Spreadsheet value sources
//!
//! A [`ValueSource`] answers "give me the values of `range` in spreadsheet
//! `id`" with a [`ValueRange`], the same shape a spreadsheet values API
//! returns. Cells are raw JSON values; trailing empty cells and rows may be
//! missing, so rows can be ragged.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sheetcopy_core::{CellAddress, CellRange};

use crate::error::{Error, Result};

/// A block of cell values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// A1 range the values cover, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// "ROWS" or "COLUMNS"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    /// Cell values, row by row
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Build a value range from rows of values
    pub fn from_rows(values: Vec<Vec<Value>>) -> Self {
        Self {
            range: None,
            major_dimension: Some("ROWS".into()),
            values,
        }
    }

    /// Cut out `range` from these values
    ///
    /// The values start at [`origin`](ValueRange::origin). When the stored
    /// range is known, a request reaching outside it is an error; rows and
    /// cells missing from ragged data are left out rather than padded.
    pub fn select(&self, range: &CellRange) -> Result<ValueRange> {
        let r = range.normalized();
        if let Some(stored) = self.stored_range() {
            if !stored.contains(&r.min) || !stored.contains(&r.max) {
                return Err(Error::OutsideStoredRange {
                    requested: r,
                    stored,
                });
            }
        }

        let origin = self.origin();
        let values = self
            .values
            .iter()
            .skip((r.min.row - origin.row) as usize)
            .take(r.row_count() as usize)
            .map(|row| {
                row.iter()
                    .skip((r.min.col - origin.col) as usize)
                    .take(r.col_count() as usize)
                    .cloned()
                    .collect()
            })
            .collect();

        Ok(ValueRange {
            range: Some(r.to_string()),
            major_dimension: self.major_dimension.clone(),
            values,
        })
    }

    /// The stored A1 range, if `range` holds one
    pub fn stored_range(&self) -> Option<CellRange> {
        self.range
            .as_deref()
            .and_then(|r| CellRange::parse(r).ok())
            .map(|r| r.normalized())
    }

    /// The top-left cell of these values, A1 when unknown
    pub fn origin(&self) -> CellAddress {
        self.stored_range().map(|r| r.min).unwrap_or_default()
    }
}

/// Something that can return the values of a spreadsheet range
pub trait ValueSource {
    /// Fetch the values of `range` (all values when empty) in spreadsheet `id`
    fn values(&self, id: &str, range: &str) -> Result<ValueRange>;
}

impl<S: ValueSource + ?Sized> ValueSource for &S {
    fn values(&self, id: &str, range: &str) -> Result<ValueRange> {
        (**self).values(id, range)
    }
}

/// Value source backed by `<dir>/<id>.json` documents
#[derive(Debug, Clone)]
pub struct JsonValueSource {
    dir: PathBuf,
}

impl JsonValueSource {
    /// Serve documents from `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for `id`
    pub fn document_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl ValueSource for JsonValueSource {
    fn values(&self, id: &str, range: &str) -> Result<ValueRange> {
        let path = self.document_path(id);
        if !path.is_file() {
            return Err(Error::SourceNotFound(id.to_string()));
        }

        let reader = BufReader::new(File::open(&path)?);
        let stored: ValueRange = serde_json::from_reader(reader)?;
        log::debug!(
            "loaded {} rows for '{}' from {}",
            stored.values.len(),
            id,
            path.display()
        );

        if range.is_empty() {
            return Ok(stored);
        }

        let range = CellRange::parse(range)?;
        stored.select(&range)
    }
}
