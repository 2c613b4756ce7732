//! Worksheet auto-filter

use crate::cell::{reference, CellRange};
use crate::error::Result;

/// The auto-filter of a worksheet, covering a single rectangular range
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoFilter {
    /// Filtered range (e.g. "A1:D20")
    pub reference: String,
}

impl AutoFilter {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Decode the stored reference into a normalised range
    pub fn range(&self) -> Result<CellRange> {
        reference::decode_area(&self.reference)
    }
}
