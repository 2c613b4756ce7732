//! Cell reference rewriting for row and column edits
//!
//! Lines that would land on 0 or below are left as they are rather than
//! clamped or dropped; removing their content is the caller's job. A line
//! pushed past the edge of the grid fails the stage before any reference on
//! the sheet is rewritten.

use super::{AdjustStats, Adjustment};
use gridshift_core::{reference, Error, Result, Worksheet, MAX_ROWS};

/// Renumber rows at or after the edit and rewrite their cells
pub(super) fn adjust_rows(
    ws: &mut Worksheet,
    adjustment: Adjustment,
    stats: &mut AdjustStats,
) -> Result<()> {
    let mut moves = Vec::new();
    for (idx, row) in ws.rows().iter().enumerate() {
        let Some(number) =
            super::shift::shift_checked(row.number, adjustment.position, adjustment.offset)
        else {
            continue;
        };
        if number > MAX_ROWS {
            return Err(Error::coordinate(1, number));
        }

        let refs = row
            .cells
            .iter()
            .map(|cell| {
                let (col, _) = reference::decode(&cell.reference)?;
                reference::encode(col, number)
            })
            .collect::<Result<Vec<String>>>()?;
        moves.push((idx, number, refs));
    }

    let rows = ws.rows_mut();
    for (idx, number, refs) in moves {
        let row = &mut rows[idx];
        row.number = number;
        stats.cells_rewritten += refs.len();
        for (cell, moved) in row.cells.iter_mut().zip(refs) {
            cell.reference = moved;
        }
        stats.rows_renumbered += 1;
    }
    Ok(())
}

/// Rewrite every cell whose column is at or after the edit
pub(super) fn adjust_columns(
    ws: &mut Worksheet,
    adjustment: Adjustment,
    stats: &mut AdjustStats,
) -> Result<()> {
    let mut moves = Vec::new();
    for (row_idx, row) in ws.rows().iter().enumerate() {
        for (cell_idx, cell) in row.cells.iter().enumerate() {
            let (col, row_number) = reference::decode(&cell.reference)?;
            if let Some((col, row_number)) = adjustment.shift_point_checked(col, row_number) {
                moves.push((row_idx, cell_idx, reference::encode(col, row_number)?));
            }
        }
    }

    let rows = ws.rows_mut();
    for (row_idx, cell_idx, moved) in moves {
        rows[row_idx].cells[cell_idx].reference = moved;
        stats.cells_rewritten += 1;
    }
    Ok(())
}
