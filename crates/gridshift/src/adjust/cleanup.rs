//! Structural cleanup after the adjusters have run

use gridshift_core::{reference, Cell, Result, Worksheet};

/// Restore row and cell order and normalise empty containers
///
/// Rows are sorted by number and cells by column (both stable), and empty
/// hyperlink or merge containers become `None`.
pub(super) fn check_sheet(ws: &mut Worksheet) -> Result<()> {
    let rows = ws.rows_mut();
    if rows.windows(2).any(|w| w[0].number > w[1].number) {
        rows.sort_by_key(|r| r.number);
    }

    for row in rows.iter_mut() {
        let cols = row
            .cells
            .iter()
            .map(|c| reference::decode(&c.reference).map(|(col, _)| col))
            .collect::<Result<Vec<u32>>>()?;

        if cols.windows(2).any(|w| w[0] > w[1]) {
            let mut keyed: Vec<(u32, Cell)> = cols.into_iter().zip(row.cells.drain(..)).collect();
            keyed.sort_by_key(|(col, _)| *col);
            row.cells = keyed.into_iter().map(|(_, cell)| cell).collect();
        }
    }

    if ws.hyperlinks().map_or(false, |h| h.is_empty()) {
        *ws.hyperlinks_mut() = None;
    }
    if ws.merge_cells().map_or(false, |m| m.is_empty()) {
        *ws.merge_cells_mut() = None;
    }
    Ok(())
}
