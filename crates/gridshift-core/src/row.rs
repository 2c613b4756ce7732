//! Row types

use crate::cell::Cell;

/// A row of stored cells
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Row number (1-based)
    pub number: u32,
    /// Custom height (None = default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Cells in this row
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new empty row with default settings
    pub fn new(number: u32) -> Self {
        Self {
            number,
            height: None,
            hidden: false,
            cells: Vec::new(),
        }
    }

    /// Builder: append a cell
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Builder: mark the row hidden
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}
