//! Prelude module - common imports for gridshift users
//!
//! ```rust
//! use gridshift::prelude::*;
//! ```

pub use crate::{
    // Engine types
    AdjustStats,
    Adjustment,
    Axis,
    // Model types
    CellAddress,
    CellRange,
    // Error types
    Error,
    Hyperlink,
    Result,
    Workbook,
    // Extension traits
    WorkbookAdjustExt,
    Worksheet,
};
