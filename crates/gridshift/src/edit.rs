//! Row and column edits on a [`Workbook`]
//!
//! # Example
//!
//! ```rust
//! use gridshift::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet_with_name("Sheet1").unwrap();
//! let sheet = workbook.worksheet_by_name_mut("Sheet1").unwrap();
//! sheet.set_cell_value("A1", "keep").unwrap();
//! sheet.set_cell_value("A2", "drop").unwrap();
//! sheet.set_cell_value("A3", "move up").unwrap();
//!
//! workbook.remove_row("Sheet1", 2).unwrap();
//!
//! let sheet = workbook.worksheet_by_name("Sheet1").unwrap();
//! let value = sheet.cell("A2").unwrap().and_then(|c| c.value.as_deref());
//! assert_eq!(value, Some("move up"));
//! ```

use crate::adjust::{adjust_sheet, AdjustStats, Adjustment, Axis};
use gridshift_core::{reference, Error, Result, Workbook};

/// Extension trait for Workbook to add structural edit methods
pub trait WorkbookAdjustExt {
    /// Shift everything on `sheet` for an edit of `offset` lines at `position`
    ///
    /// Positive offsets insert, negative offsets delete. Only stored
    /// references are moved; content on deleted lines is not removed.
    fn adjust(
        &mut self,
        sheet: &str,
        axis: Axis,
        position: u32,
        offset: i32,
    ) -> Result<AdjustStats>;

    /// Insert `count` empty rows before `row`
    fn insert_rows(&mut self, sheet: &str, row: u32, count: u32) -> Result<AdjustStats>;

    /// Delete row `row` with its cells and pull the rows below up
    fn remove_row(&mut self, sheet: &str, row: u32) -> Result<AdjustStats>;

    /// Insert `count` empty columns before `col`
    fn insert_cols(&mut self, sheet: &str, col: u32, count: u32) -> Result<AdjustStats>;

    /// Delete column `col` with its cells and pull the columns to the right left
    fn remove_col(&mut self, sheet: &str, col: u32) -> Result<AdjustStats>;
}

impl WorkbookAdjustExt for Workbook {
    fn adjust(
        &mut self,
        sheet: &str,
        axis: Axis,
        position: u32,
        offset: i32,
    ) -> Result<AdjustStats> {
        let mut ctx = self.edit_context(sheet)?;
        adjust_sheet(&mut ctx, Adjustment::new(axis, position, offset))
    }

    fn insert_rows(&mut self, sheet: &str, row: u32, count: u32) -> Result<AdjustStats> {
        let offset = line_count(count).ok_or_else(|| Error::coordinate(1, row))?;
        self.adjust(sheet, Axis::Row, row, offset)
    }

    fn remove_row(&mut self, sheet: &str, row: u32) -> Result<AdjustStats> {
        if row == 0 {
            return Err(Error::coordinate(1, row));
        }
        let ws = self
            .worksheet_by_name_mut(sheet)
            .ok_or_else(|| Error::SheetNotFound(sheet.to_string()))?;
        ws.rows_mut().retain(|r| r.number != row);

        self.adjust(sheet, Axis::Row, row, -1)
    }

    fn insert_cols(&mut self, sheet: &str, col: u32, count: u32) -> Result<AdjustStats> {
        let offset = line_count(count).ok_or_else(|| Error::coordinate(col, 1))?;
        self.adjust(sheet, Axis::Column, col, offset)
    }

    fn remove_col(&mut self, sheet: &str, col: u32) -> Result<AdjustStats> {
        if col == 0 {
            return Err(Error::coordinate(col, 1));
        }
        let ws = self
            .worksheet_by_name_mut(sheet)
            .ok_or_else(|| Error::SheetNotFound(sheet.to_string()))?;

        for row in ws.rows_mut().iter_mut() {
            let cols = row
                .cells
                .iter()
                .map(|cell| reference::decode(&cell.reference).map(|(c, _)| c))
                .collect::<Result<Vec<u32>>>()?;
            let mut cols = cols.into_iter();
            row.cells.retain(|_| cols.next() != Some(col));
        }

        self.adjust(sheet, Axis::Column, col, -1)
    }
}

fn line_count(count: u32) -> Option<i32> {
    match i32::try_from(count) {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
