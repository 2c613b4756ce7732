//! # gridshift-core
//!
//! Core data structures for the gridshift structural adjustment engine.
//!
//! This crate provides the in-memory worksheet model the engine mutates:
//! - [`CellAddress`] and [`CellRange`] - 1-based cell addressing and ranges
//! - [`reference`] - conversion between coordinates and A1 reference text
//! - [`Worksheet`], [`Row`], [`Cell`] - the sheet and its stored cells
//! - [`Hyperlinks`], [`MergeCells`], [`AutoFilter`] - sheet-level ranges
//! - [`Workbook`], [`CalcChain`], [`Relationships`] - workbook-level parts
//!
//! ## Example
//!
//! ```rust
//! use gridshift_core::{reference, Workbook};
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet_with_name("Sheet1").unwrap();
//!
//! let sheet = workbook.worksheet_by_name_mut("Sheet1").unwrap();
//! sheet.set_cell_value("B2", "Hello").unwrap();
//!
//! assert_eq!(reference::decode("B2").unwrap(), (2, 2));
//! assert_eq!(reference::encode(28, 4).unwrap(), "AB4");
//! ```

pub mod auto_filter;
pub mod calc_chain;
pub mod cell;
pub mod error;
pub mod hyperlink;
pub mod merge;
pub mod relationship;
pub mod row;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use auto_filter::AutoFilter;
pub use calc_chain::{CalcCell, CalcChain};
pub use cell::{reference, Cell, CellAddress, CellRange};
pub use error::{Error, Result};
pub use hyperlink::{Hyperlink, Hyperlinks};
pub use merge::{MergeCell, MergeCells};
pub use relationship::{Relationship, RelationshipStore, Relationships};
pub use row::Row;
pub use workbook::{EditContext, Workbook};
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
