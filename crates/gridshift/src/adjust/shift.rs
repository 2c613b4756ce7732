//! The coordinate shifting rule shared by every stage
//!
//! An edit at `num` with a signed `offset` moves everything at or after `num`
//! by `offset`; anything before `num` stays put.

/// Shift `pivot` for an edit at `num`, clamping the result to at least 1
///
/// Used where a range bound or anchor must always land on the grid.
pub fn shift(pivot: u32, num: u32, offset: i32) -> u32 {
    if pivot < num {
        return pivot;
    }
    let shifted = i64::from(pivot) + i64::from(offset);
    shifted.clamp(1, i64::from(u32::MAX)) as u32
}

/// Shift `pivot` for an edit at `num`, or `None` when it should be left alone
///
/// Returns `None` both when `pivot` lies before the edit and when the shifted
/// value would be 0 or negative. Callers skip the rewrite in either case.
pub fn shift_checked(pivot: u32, num: u32, offset: i32) -> Option<u32> {
    if pivot < num {
        return None;
    }
    let shifted = i64::from(pivot) + i64::from(offset);
    if shifted > 0 {
        u32::try_from(shifted).ok()
    } else {
        None
    }
}
