//! Structural adjustment engine
//!
//! When rows or columns are inserted into or deleted from a sheet, every
//! stored coordinate that sits at or after the edit has to move. The stages
//! run in a fixed order, each on the same sheet:
//!
//! 1. cell references (row or column axis)
//! 2. hyperlinks
//! 3. merged ranges
//! 4. the auto-filter
//! 5. calc chain entries of the sheet
//! 6. structural cleanup
//!
//! The first failing stage aborts the call. Stages that already ran keep
//! their changes; callers that need atomicity snapshot the workbook first.
//!
//! # Example
//!
//! ```rust
//! use gridshift::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet_with_name("Sheet1").unwrap();
//! let sheet = workbook.worksheet_by_name_mut("Sheet1").unwrap();
//! sheet.set_cell_value("A3", "moved").unwrap();
//!
//! // Insert two rows before row 2
//! workbook.adjust("Sheet1", Axis::Row, 2, 2).unwrap();
//!
//! let sheet = workbook.worksheet_by_name("Sheet1").unwrap();
//! assert!(sheet.cell("A5").unwrap().is_some());
//! ```

mod auto_filter;
mod calc_chain;
mod cleanup;
mod dimensions;
mod hyperlinks;
mod merge_cells;
pub mod shift;

use gridshift_core::{EditContext, Error, Result};

/// Whether an edit operates on rows or columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The component of `(col, row)` this axis moves
    pub fn pick(self, col: u32, row: u32) -> u32 {
        match self {
            Axis::Row => row,
            Axis::Column => col,
        }
    }
}

/// A single insertion or deletion
///
/// `position` is the 1-based row or column index the edit happens at;
/// `offset` is positive for inserted lines and negative for deleted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub axis: Axis,
    pub position: u32,
    pub offset: i32,
}

impl Adjustment {
    pub fn new(axis: Axis, position: u32, offset: i32) -> Self {
        Self {
            axis,
            position,
            offset,
        }
    }

    /// True for deletions
    pub fn is_deletion(&self) -> bool {
        self.offset < 0
    }

    /// Shift the moving component of `(col, row)` with the clamping rule
    pub(crate) fn shift_point(&self, col: u32, row: u32) -> (u32, u32) {
        match self.axis {
            Axis::Row => (col, shift::shift(row, self.position, self.offset)),
            Axis::Column => (shift::shift(col, self.position, self.offset), row),
        }
    }

    /// Shift the moving component of `(col, row)`, `None` when it must not be rewritten
    pub(crate) fn shift_point_checked(&self, col: u32, row: u32) -> Option<(u32, u32)> {
        match self.axis {
            Axis::Row => shift::shift_checked(row, self.position, self.offset).map(|r| (col, r)),
            Axis::Column => {
                shift::shift_checked(col, self.position, self.offset).map(|c| (c, row))
            }
        }
    }
}

/// What an adjustment changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustStats {
    /// Rows whose number changed
    pub rows_renumbered: usize,
    /// Cell references rewritten
    pub cells_rewritten: usize,
    /// Hyperlinks removed because their anchor line was deleted
    pub hyperlinks_removed: usize,
    /// Merged ranges removed
    pub merge_cells_removed: usize,
    /// Whether the auto-filter was cleared
    pub auto_filter_cleared: bool,
    /// Calc chain entries rewritten
    pub calc_chain_shifted: usize,
}

/// Apply one insertion or deletion to the sheet held by `ctx`
///
/// An `offset` of zero changes nothing. A `position` of zero is rejected with
/// [`Error::InvalidCoordinate`].
pub fn adjust_sheet(ctx: &mut EditContext<'_>, adjustment: Adjustment) -> Result<AdjustStats> {
    let mut stats = AdjustStats::default();

    if adjustment.position == 0 {
        return Err(match adjustment.axis {
            Axis::Row => Error::coordinate(1, 0),
            Axis::Column => Error::coordinate(0, 1),
        });
    }
    if adjustment.offset == 0 {
        return Ok(stats);
    }

    let sheet = ctx.worksheet.name().to_string();
    log::debug!(
        "adjusting sheet '{}' (id {}): {:?} at {} by {}",
        sheet,
        ctx.sheet_id,
        adjustment.axis,
        adjustment.position,
        adjustment.offset
    );

    match adjustment.axis {
        Axis::Row => dimensions::adjust_rows(ctx.worksheet, adjustment, &mut stats)?,
        Axis::Column => dimensions::adjust_columns(ctx.worksheet, adjustment, &mut stats)?,
    }
    hyperlinks::adjust(
        ctx.worksheet,
        &sheet,
        &mut *ctx.relationships,
        adjustment,
        &mut stats,
    )?;
    merge_cells::adjust(ctx.worksheet, adjustment, &mut stats)?;
    auto_filter::adjust(ctx.worksheet, adjustment, &mut stats)?;
    if let Some(chain) = ctx.calc_chain.as_deref_mut() {
        calc_chain::adjust(chain, ctx.sheet_id, adjustment, &mut stats)?;
    }
    cleanup::check_sheet(ctx.worksheet)?;

    log::debug!("adjusted sheet '{}': {:?}", sheet, stats);
    Ok(stats)
}
