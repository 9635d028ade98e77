//! Cell-related types
//!
//! This module contains [`CellAddress`], a cell's location (e.g., "A1").
//! Ranges of cells live in [`crate::range`].

mod address;

pub use address::CellAddress;
