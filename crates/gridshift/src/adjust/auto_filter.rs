//! The sheet auto-filter

use super::{AdjustStats, Adjustment, Axis};
use gridshift_core::{reference, AutoFilter, CellRange, Result, Worksheet};

/// Shift the auto-filter, or clear it when the edit removes its anchor
///
/// The filter is cleared by a row deletion at its top row, or by any column
/// edit on a filter exactly one column wide at that column. Clearing un-hides
/// the rows below the header that the filter may have hidden.
///
/// For column edits only the right bound moves; the left bound is never
/// shifted.
pub(super) fn adjust(
    ws: &mut Worksheet,
    adjustment: Adjustment,
    stats: &mut AdjustStats,
) -> Result<()> {
    let Some(filter) = ws.auto_filter() else {
        return Ok(());
    };

    let range = reference::decode_area(&filter.reference)?;
    let [x1, y1, x2, y2] = range.coordinates();
    let num = adjustment.position;

    let cleared = match adjustment.axis {
        Axis::Row => adjustment.is_deletion() && y1 == num,
        Axis::Column => x1 == num && x2 == num,
    };
    if cleared {
        log::debug!("clearing auto-filter {}", filter.reference);
        *ws.auto_filter_mut() = None;
        for row in ws.rows_mut().iter_mut() {
            if row.number > y1 && row.number <= y2 {
                row.hidden = false;
            }
        }
        stats.auto_filter_cleared = true;
        return Ok(());
    }

    let offset = adjustment.offset;
    let shifted = match adjustment.axis {
        Axis::Row => [
            x1,
            super::shift::shift(y1, num, offset),
            x2,
            super::shift::shift(y2, num, offset),
        ],
        Axis::Column => [x1, y1, super::shift::shift(x2, num, offset), y2],
    };

    let encoded = CellRange::from_coordinates(shifted).to_a1_string()?;
    *ws.auto_filter_mut() = Some(AutoFilter::new(encoded));
    Ok(())
}
