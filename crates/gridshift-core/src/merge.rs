//! Merged cell ranges

use crate::cell::{reference, CellRange};
use crate::error::Result;

/// A single merged range, stored as its reference text (e.g. "A1:C2")
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeCell {
    pub reference: String,
}

impl MergeCell {
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

/// The merged-range container of a worksheet
///
/// `count` mirrors the number of ranges, as the document format records it
/// alongside the list. All mutation goes through methods that keep the two
/// in step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeCells {
    count: usize,
    cells: Vec<MergeCell>,
}

impl MergeCells {
    /// Create a container from a list of ranges
    pub fn new(cells: Vec<MergeCell>) -> Self {
        Self {
            count: cells.len(),
            cells,
        }
    }

    /// Recorded number of ranges
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of ranges held
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Ranges in document order
    pub fn cells(&self) -> &[MergeCell] {
        &self.cells
    }

    /// Get a range by index
    pub fn get(&self, index: usize) -> Option<&MergeCell> {
        self.cells.get(index)
    }

    /// Get a mutable range by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut MergeCell> {
        self.cells.get_mut(index)
    }

    /// Append a range
    pub fn push(&mut self, cell: MergeCell) {
        self.cells.push(cell);
        self.count = self.cells.len();
    }

    /// Remove the range at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<MergeCell> {
        if index >= self.cells.len() {
            return None;
        }
        let removed = self.cells.remove(index);
        self.count = self.cells.len();
        Some(removed)
    }
}
