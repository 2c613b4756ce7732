//! Hyperlink anchors

use super::{AdjustStats, Adjustment};
use gridshift_core::{reference, Hyperlinks, RelationshipStore, Result, Worksheet};

/// Drop hyperlinks anchored on a deleted line, then shift the rest
///
/// Each dropped link that carries a relationship id has that record removed
/// from `store`. An emptied container becomes `None`.
pub(super) fn adjust(
    ws: &mut Worksheet,
    sheet: &str,
    store: &mut dyn RelationshipStore,
    adjustment: Adjustment,
    stats: &mut AdjustStats,
) -> Result<()> {
    let slot = ws.hyperlinks_mut();
    if slot.is_none() {
        return Ok(());
    }

    if adjustment.is_deletion() {
        if let Some(hyperlinks) = slot.as_mut() {
            // Back to front, so removals don't disturb indices still to visit
            for idx in (0..hyperlinks.links.len()).rev() {
                let (col, row) = reference::decode(&hyperlinks.links[idx].reference)?;
                if adjustment.axis.pick(col, row) != adjustment.position {
                    continue;
                }

                let link = hyperlinks.links.remove(idx);
                log::debug!("removing hyperlink at {} on sheet '{}'", link.reference, sheet);
                if let Some(rel_id) = &link.rel_id {
                    store.delete_relationship(sheet, rel_id);
                }
                stats.hyperlinks_removed += 1;
            }
        }
    }

    if slot.as_ref().map_or(true, Hyperlinks::is_empty) {
        *slot = None;
        return Ok(());
    }

    if let Some(hyperlinks) = slot.as_mut() {
        for link in hyperlinks.links.iter_mut() {
            let (col, row) = reference::decode(&link.reference)?;
            let shifted = adjustment.shift_point(col, row);
            if shifted != (col, row) {
                let moved = reference::encode(shifted.0, shifted.1)?;
                log::trace!("hyperlink {} -> {}", link.reference, moved);
                link.reference = moved;
            }
        }
    }
    Ok(())
}
