//! Calc chain entries of the edited sheet

use super::{AdjustStats, Adjustment};
use gridshift_core::{reference, CalcChain, Result};

/// Shift the entries that belong to `sheet_id`
///
/// Entries are never removed here. One whose shifted coordinate would be 0
/// or below is left unchanged.
pub(super) fn adjust(
    chain: &mut CalcChain,
    sheet_id: u32,
    adjustment: Adjustment,
    stats: &mut AdjustStats,
) -> Result<()> {
    for cell in chain.cells.iter_mut().filter(|c| c.sheet_id == sheet_id) {
        let (col, row) = reference::decode(&cell.reference)?;
        if let Some((col, row)) = adjustment.shift_point_checked(col, row) {
            cell.reference = reference::encode(col, row)?;
            stats.calc_chain_shifted += 1;
        }
    }
    Ok(())
}
