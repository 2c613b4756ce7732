//! Workbook type - the container the adjustment engine is handed

use crate::calc_chain::CalcChain;
use crate::error::{Error, Result};
use crate::relationship::{RelationshipStore, Relationships};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook: worksheets plus the workbook-level parts that refer to them
#[derive(Debug, Default)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Calculation chain, if the document has one
    calc_chain: Option<CalcChain>,
    /// Per-sheet relationship records
    relationships: Relationships,
}

/// Mutable view of one sheet and the workbook parts an edit touches
///
/// Returned by [`Workbook::edit_context`]. The borrows are disjoint, so the
/// worksheet, calc chain and relationship store can be updated side by side.
pub struct EditContext<'a> {
    /// Identifier of the sheet being edited
    pub sheet_id: u32,
    /// The sheet being edited
    pub worksheet: &'a mut Worksheet,
    /// The workbook calc chain, if any
    pub calc_chain: Option<&'a mut CalcChain>,
    /// Store notified when a sheet relationship must go
    pub relationships: &'a mut dyn RelationshipStore,
}

impl Workbook {
    /// Create an empty workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Look up a sheet id by sheet name
    pub fn sheet_id(&self, name: &str) -> Option<u32> {
        self.worksheet_by_name(name).map(Worksheet::sheet_id)
    }

    /// Add a new worksheet, assigning the next free sheet id
    ///
    /// Returns the id of the new sheet.
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<u32> {
        self.validate_sheet_name(name)?;

        let sheet_id = self
            .worksheets
            .iter()
            .map(Worksheet::sheet_id)
            .max()
            .unwrap_or(0)
            + 1;
        self.worksheets.push(Worksheet::new(name, sheet_id));
        Ok(sheet_id)
    }

    // === Workbook-level parts ===

    /// The calc chain, if any
    pub fn calc_chain(&self) -> Option<&CalcChain> {
        self.calc_chain.as_ref()
    }

    /// Replace the calc chain
    pub fn set_calc_chain(&mut self, calc_chain: Option<CalcChain>) {
        self.calc_chain = calc_chain;
    }

    /// Sheet relationship records
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Mutable access to the relationship records
    pub fn relationships_mut(&mut self) -> &mut Relationships {
        &mut self.relationships
    }

    /// Borrow a sheet together with the workbook parts an edit needs
    pub fn edit_context(&mut self, sheet: &str) -> Result<EditContext<'_>> {
        let worksheet = self
            .worksheets
            .iter_mut()
            .find(|ws| ws.name() == sheet)
            .ok_or_else(|| Error::SheetNotFound(sheet.to_string()))?;

        Ok(EditContext {
            sheet_id: worksheet.sheet_id(),
            worksheet,
            calc_chain: self.calc_chain.as_mut(),
            relationships: &mut self.relationships,
        })
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Case-insensitive, as in the document format
        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}
