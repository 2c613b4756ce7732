//! Error types for gridshift-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding references or adjusting a sheet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed cell reference text
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Malformed range reference, or a range without exactly two cells
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Column or row below 1 (or beyond the grid) passed to encoding
    #[error("Invalid coordinate: column {col}, row {row}")]
    InvalidCoordinate { col: u32, row: u32 },

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Merged range overlaps an existing one
    #[error("Range {0} overlaps a merged region")]
    MergedCellConflict(String),
}

impl Error {
    /// Create an [`Error::InvalidCoordinate`] for the given pair
    pub fn coordinate(col: u32, row: u32) -> Self {
        Error::InvalidCoordinate { col, row }
    }
}
