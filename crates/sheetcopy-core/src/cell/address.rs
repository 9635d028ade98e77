//! Cell address type

use crate::column::{column_name, column_number};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "XFD3")
///
/// Both coordinates are stored 0-based, so "A1" is `row = 0, col = 0`.
/// Addresses are plain values: moving one returns a new address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u16,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The column letters are the maximal leading run of ASCII letters and
    /// are case-insensitive; everything after them must be a row number.
    /// Leading zeros in the row are accepted, so "a01" formats back as "A1".
    ///
    /// # Examples
    /// ```
    /// use sheetcopy_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("b5").unwrap();
    /// assert_eq!(addr.row, 4);
    /// assert_eq!(addr.col, 1);
    ///
    /// assert!(CellAddress::parse("5A1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() < 2 {
            return Err(Error::InvalidAddress(format!("'{}' is too short", s)));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());

        if split == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if split == s.len() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let (letters, digits) = s.split_at(split);

        // `u16::from_str` would also take a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidRow(s.to_string()));
        }
        let row: u16 = digits
            .parse()
            .map_err(|_| Error::InvalidRow(s.to_string()))?;
        if row == 0 {
            return Err(Error::InvalidRow(s.to_string()));
        }

        let col = column_number(letters)?;

        Ok(Self {
            row: row - 1,
            col: col - 1,
        })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = column_name(self.col as u32 + 1);
        result.push_str(&(self.row as u32 + 1).to_string());
        result
    }

    /// Whether this address lies below or to the right of `other`
    ///
    /// True unless `self` is coordinate-wise less than or equal to `other`.
    pub fn greater_than(&self, other: &CellAddress) -> bool {
        self.row > other.row || self.col > other.col
    }

    /// Move the address by `vertical` rows and `horizontal` columns
    ///
    /// The result is clamped to the sheet, so moving "B2" up by five rows
    /// lands on "B1".
    pub fn offset(&self, vertical: i32, horizontal: i32) -> Self {
        let row = (self.row as i64 + vertical as i64).clamp(0, MAX_ROWS as i64 - 1);
        let col = (self.col as i64 + horizontal as i64).clamp(0, MAX_COLS as i64 - 1);
        Self::new(row as u16, col as u16)
    }

    /// Move the address, failing if it would leave the sheet
    pub fn try_offset(&self, vertical: i32, horizontal: i32) -> Result<Self> {
        let row = self.row as i64 + vertical as i64;
        if !(0..MAX_ROWS as i64).contains(&row) {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        let col = self.col as i64 + horizontal as i64;
        if !(0..MAX_COLS as i64).contains(&col) {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Ok(Self::new(row as u16, col as u16))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellAddress {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellAddress {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
