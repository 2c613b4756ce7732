//! Workbook calculation chain

/// One entry of the calculation chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalcCell {
    /// Cell reference on the owning sheet
    pub reference: String,
    /// Identifier of the owning sheet
    pub sheet_id: u32,
}

impl CalcCell {
    pub fn new<S: Into<String>>(sheet_id: u32, reference: S) -> Self {
        Self {
            reference: reference.into(),
            sheet_id,
        }
    }
}

/// The ordered list of formula cells in recalculation order, for all sheets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalcChain {
    pub cells: Vec<CalcCell>,
}

impl CalcChain {
    pub fn new(cells: Vec<CalcCell>) -> Self {
        Self { cells }
    }
}
