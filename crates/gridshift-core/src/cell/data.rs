//! Stored cell data

/// A cell as held inside a [`Row`](crate::Row)
///
/// `reference` is authoritative for the cell's position; the cell's index in
/// its row's cell list is not. Value and formula text are carried through
/// edits untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// A1-style reference of the cell
    pub reference: String,
    /// Raw stored value, if any
    pub value: Option<String>,
    /// Formula text, if any
    pub formula: Option<String>,
}

impl Cell {
    /// Create an empty cell at the given reference
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self {
            reference: reference.into(),
            value: None,
            formula: None,
        }
    }

    /// Builder: set the raw value
    pub fn with_value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder: set the formula text
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }
}
