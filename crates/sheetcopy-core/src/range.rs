//! Range type for rectangular cell regions

use crate::cell::CellAddress;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A range of cells (e.g., "A1:B10")
///
/// [`CellRange::new`] and [`CellRange::parse`] keep `min` at the top-left
/// and `max` at the bottom-right. The fields are public, so a range built
/// by hand may be unnormalized; formatting and [`CellRange::square`] work
/// on a normalized copy either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Top-left corner
    pub min: CellAddress,
    /// Bottom-right corner
    pub max: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalizing the corners
    ///
    /// If `a` is greater than `b` the corners are reordered per coordinate,
    /// so both "B33:A2" and "A33:B2" become "A2:B33".
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        if a.greater_than(&b) {
            Self {
                min: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
                max: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
            }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            min: addr,
            max: addr,
        }
    }

    /// Parse a range from A1:B10 notation
    ///
    /// ```
    /// use sheetcopy_core::CellRange;
    ///
    /// let range = CellRange::parse("B33:A2").unwrap();
    /// assert_eq!(range.to_string(), "A2:B33");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidRange(format!(
                "expected two cells separated by ':' in '{}'",
                s
            )));
        }

        let a = CellAddress::parse(parts[0])
            .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
        let b = CellAddress::parse(parts[1])
            .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;

        Ok(Self::new(a, b))
    }

    /// Copy of this range with `min`/`max` reordered if needed
    pub fn normalized(&self) -> Self {
        Self::new(self.min, self.max)
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        let r = self.normalized();
        (r.max.row - r.min.row) as u32 + 1
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u32 {
        let r = self.normalized();
        (r.max.col - r.min.col) as u32 + 1
    }

    /// Area of the range in cells
    pub fn square(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        let r = self.normalized();
        addr.row >= r.min.row
            && addr.row <= r.max.row
            && addr.col >= r.min.col
            && addr.col <= r.max.col
    }

    /// Move both corners by the same offsets
    ///
    /// Each corner is clamped to the sheet independently (see
    /// [`CellAddress::offset`]), so a range pushed past an edge shrinks.
    pub fn offset(&self, vertical: i32, horizontal: i32) -> Self {
        Self {
            min: self.min.offset(vertical, horizontal),
            max: self.max.offset(vertical, horizontal),
        }
    }

    /// Move both corners, failing if either would leave the sheet
    pub fn try_offset(&self, vertical: i32, horizontal: i32) -> Result<Self> {
        Ok(Self {
            min: self.min.try_offset(vertical, horizontal)?,
            max: self.max.try_offset(vertical, horizontal)?,
        })
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        let r = self.normalized();
        format!("{}:{}", r.min, r.max)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellRange {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellRange {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
