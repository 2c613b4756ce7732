//! Worksheet type

use crate::auto_filter::AutoFilter;
use crate::cell::{reference, Cell, CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::hyperlink::{Hyperlink, Hyperlinks};
use crate::merge::{MergeCell, MergeCells};
use crate::row::Row;

/// A worksheet (single sheet in a workbook)
///
/// Optional containers are `None` when the sheet has none of that kind of
/// entry; an emptied container is normalised back to `None` by the
/// adjustment engine.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Identifier used by workbook-level parts such as the calc chain
    sheet_id: u32,
    /// Stored rows, ordered by row number
    rows: Vec<Row>,
    /// Auto-filter, if any
    auto_filter: Option<AutoFilter>,
    /// Hyperlinks, if any
    hyperlinks: Option<Hyperlinks>,
    /// Merged ranges, if any
    merge_cells: Option<MergeCells>,
}

impl Worksheet {
    /// Create a new worksheet with the given name and sheet id
    pub fn new<S: Into<String>>(name: S, sheet_id: u32) -> Self {
        Self {
            name: name.into(),
            sheet_id,
            ..Default::default()
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the sheet id
    pub fn sheet_id(&self) -> u32 {
        self.sheet_id
    }

    // === Rows and cells ===

    /// Stored rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to the stored rows
    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    /// Get a row by its number
    pub fn row(&self, number: u32) -> Option<&Row> {
        self.rows.iter().find(|r| r.number == number)
    }

    /// Get a mutable row by its number
    pub fn row_mut(&mut self, number: u32) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.number == number)
    }

    /// Add a row, keeping rows ordered by number
    ///
    /// An existing row with the same number is replaced.
    pub fn insert_row(&mut self, row: Row) {
        match self.rows.binary_search_by_key(&row.number, |r| r.number) {
            Ok(idx) => self.rows[idx] = row,
            Err(idx) => self.rows.insert(idx, row),
        }
    }

    /// Get a cell by its reference (e.g. "B3")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        let Some(row) = self.row(addr.row) else {
            return Ok(None);
        };
        for cell in &row.cells {
            if reference::decode(&cell.reference)? == (addr.col, addr.row) {
                return Ok(Some(cell));
            }
        }
        Ok(None)
    }

    /// Set a cell's raw value, creating the row and cell as needed
    pub fn set_cell_value<V: Into<String>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        let reference = addr.to_a1_string()?;

        if self.row(addr.row).is_none() {
            self.insert_row(Row::new(addr.row));
        }
        let row = self
            .row_mut(addr.row)
            .ok_or_else(|| Error::InvalidReference(reference.clone()))?;

        let mut position = row.cells.len();
        let mut existing = None;
        for (idx, cell) in row.cells.iter().enumerate() {
            let (col, _) = reference::decode(&cell.reference)?;
            if col == addr.col {
                existing = Some(idx);
                break;
            }
            if col > addr.col {
                position = idx;
                break;
            }
        }

        match existing {
            Some(idx) => row.cells[idx].value = Some(value.into()),
            None => row
                .cells
                .insert(position, Cell::new(reference).with_value(value)),
        }
        Ok(())
    }

    /// Check if a row is hidden
    pub fn is_row_hidden(&self, number: u32) -> bool {
        self.row(number).map(|r| r.hidden).unwrap_or(false)
    }

    /// Set row hidden state, creating the row if needed
    pub fn set_row_hidden(&mut self, number: u32, hidden: bool) {
        match self.row_mut(number) {
            Some(row) => row.hidden = hidden,
            None => self.insert_row(Row::new(number).hidden(hidden)),
        }
    }

    // === Hyperlinks ===

    /// Hyperlink container, `None` when the sheet has no links
    pub fn hyperlinks(&self) -> Option<&Hyperlinks> {
        self.hyperlinks.as_ref()
    }

    /// Mutable access to the hyperlink container
    pub fn hyperlinks_mut(&mut self) -> &mut Option<Hyperlinks> {
        &mut self.hyperlinks
    }

    /// Add a hyperlink
    pub fn add_hyperlink(&mut self, link: Hyperlink) {
        self.hyperlinks.get_or_insert_with(Hyperlinks::default).links.push(link);
    }

    // === Merged cells ===

    /// Merged-range container, `None` when nothing is merged
    pub fn merge_cells(&self) -> Option<&MergeCells> {
        self.merge_cells.as_ref()
    }

    /// Mutable access to the merged-range container
    pub fn merge_cells_mut(&mut self) -> &mut Option<MergeCells> {
        &mut self.merge_cells
    }

    /// Merge a range of cells
    pub fn merge_range(&mut self, range: &CellRange) -> Result<()> {
        if let Some(merges) = &self.merge_cells {
            for existing in merges.cells() {
                if overlaps(&existing.range()?, range) {
                    return Err(Error::MergedCellConflict(range.to_a1_string()?));
                }
            }
        }
        let cell = MergeCell::new(range.to_a1_string()?);
        self.merge_cells.get_or_insert_with(MergeCells::default).push(cell);
        Ok(())
    }

    // === Auto-filter ===

    /// The sheet's auto-filter, if any
    pub fn auto_filter(&self) -> Option<&AutoFilter> {
        self.auto_filter.as_ref()
    }

    /// Mutable access to the auto-filter slot
    pub fn auto_filter_mut(&mut self) -> &mut Option<AutoFilter> {
        &mut self.auto_filter
    }

    /// Set (or replace) the auto-filter range
    pub fn set_auto_filter(&mut self, range: &CellRange) -> Result<()> {
        self.auto_filter = Some(AutoFilter::new(range.to_a1_string()?));
        Ok(())
    }
}

fn overlaps(a: &CellRange, b: &CellRange) -> bool {
    a.start.row <= b.end.row
        && a.end.row >= b.start.row
        && a.start.col <= b.end.col
        && a.end.col >= b.start.col
}
