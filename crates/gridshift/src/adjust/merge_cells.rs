//! Merged ranges

use super::{AdjustStats, Adjustment, Axis};
use gridshift_core::{reference, CellRange, Result, Worksheet};

/// Shift merged ranges, removing the ones the edit destroys
///
/// A range is removed when a deletion hits a range that is exactly one line
/// thick on that line, or when shifting leaves it a single cell.
pub(super) fn adjust(
    ws: &mut Worksheet,
    adjustment: Adjustment,
    stats: &mut AdjustStats,
) -> Result<()> {
    let slot = ws.merge_cells_mut();
    let Some(merges) = slot.as_mut() else {
        return Ok(());
    };

    let num = adjustment.position;
    let offset = adjustment.offset;

    // Index only advances past kept ranges; after a removal the same index
    // holds the next range.
    let mut idx = 0;
    while let Some(cell) = merges.get(idx) {
        let [x1, y1, x2, y2] = reference::decode_range(&cell.reference)?;

        let (low, high) = match adjustment.axis {
            Axis::Row => (y1, y2),
            Axis::Column => (x1, x2),
        };
        if adjustment.is_deletion() && low == num && high == num {
            if let Some(removed) = merges.remove(idx) {
                log::debug!("removing merged range {} on deleted line", removed.reference);
            }
            stats.merge_cells_removed += 1;
            continue;
        }

        let shifted = match adjustment.axis {
            Axis::Row => [
                x1,
                super::shift::shift(y1, num, offset),
                x2,
                super::shift::shift(y2, num, offset),
            ],
            Axis::Column => [
                super::shift::shift(x1, num, offset),
                y1,
                super::shift::shift(x2, num, offset),
                y2,
            ],
        };
        let range = CellRange::from_coordinates(shifted);
        if range.is_single_cell() {
            if let Some(removed) = merges.remove(idx) {
                log::debug!("removing merged range {} collapsed to one cell", removed.reference);
            }
            stats.merge_cells_removed += 1;
            continue;
        }

        let encoded = range.to_a1_string()?;
        if let Some(cell) = merges.get_mut(idx) {
            cell.reference = encoded;
        }
        idx += 1;
    }

    if merges.is_empty() {
        *slot = None;
    }
    Ok(())
}
