//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`Cell`] - A stored cell with its reference text
//! - [`reference`] - The codec between coordinates and reference text

mod address;
mod data;
pub mod reference;

pub use address::{CellAddress, CellRange};
pub use data::Cell;
