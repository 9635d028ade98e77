//! # sheetcopy-core
//!
//! Cell address and range codec for sheetcopy.
//!
//! This crate converts between A1-style text and numeric coordinates:
//! - [`column`] - Bijective base-26 column names (`A`, `Z`, `AA`, ..., `XFD`)
//! - [`CellAddress`] - A single cell, stored 0-based
//! - [`CellRange`] - A rectangle of cells with area and translation
//!
//! ## Example
//!
//! ```rust
//! use sheetcopy_core::{CellAddress, CellRange};
//!
//! let addr: CellAddress = "XFD3".parse().unwrap();
//! assert_eq!((addr.row, addr.col), (2, 16383));
//!
//! let range = CellRange::parse("J23:L27").unwrap();
//! assert_eq!(range.square(), 15);
//! assert_eq!(range.offset(-10, -5).to_string(), "E13:G17");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use cell::CellAddress;
pub use error::{Error, Result};
pub use range::CellRange;

/// Maximum row number (1-based); rows are 16-bit
pub const MAX_ROWS: u32 = 65_535;

/// Maximum number of columns ("XFD")
pub const MAX_COLS: u16 = 16_384;
