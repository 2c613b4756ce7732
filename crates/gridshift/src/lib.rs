//! # gridshift
//!
//! Keeps a worksheet consistent when rows or columns are inserted or deleted.
//!
//! An edit shifts coordinates non-uniformly: everything at or after the edit
//! moves, everything before it stays. gridshift applies that shift to every
//! place a worksheet stores coordinates:
//!
//! - cell references
//! - hyperlink anchors (dropping links on deleted lines, together with their
//!   relationship records)
//! - merged ranges (dropping the ones that collapse)
//! - the auto-filter range (clearing it when its anchor goes)
//! - the sheet's entries in the workbook calc chain
//!
//! It works on an in-memory model ([`gridshift_core`]) and never reads or
//! writes a file format.
//!
//! ## Example
//!
//! ```rust
//! use gridshift::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet_with_name("Sheet1").unwrap();
//!
//! let sheet = workbook.worksheet_by_name_mut("Sheet1").unwrap();
//! sheet.set_cell_value("B4", "total").unwrap();
//! sheet.merge_range(&CellRange::parse("A4:C4").unwrap()).unwrap();
//!
//! // Insert three rows before row 2
//! let stats = workbook.insert_rows("Sheet1", 2, 3).unwrap();
//! assert_eq!(stats.cells_rewritten, 1);
//!
//! let sheet = workbook.worksheet_by_name("Sheet1").unwrap();
//! assert!(sheet.cell("B7").unwrap().is_some());
//! assert_eq!(sheet.merge_cells().unwrap().cells()[0].reference, "A7:C7");
//! ```

pub mod adjust;
pub mod edit;
pub mod prelude;

pub use adjust::{adjust_sheet, AdjustStats, Adjustment, Axis};
pub use edit::WorkbookAdjustExt;

// Re-export core types
pub use gridshift_core::{
    reference, AutoFilter, CalcCell, CalcChain, Cell, CellAddress, CellRange, EditContext,
    Error, Hyperlink, Hyperlinks, MergeCell, MergeCells, Relationship, RelationshipStore,
    Relationships, Result, Row, Workbook, Worksheet, MAX_COLS, MAX_ROWS,
};
