//! Worksheet hyperlinks

/// A hyperlink anchored on a single cell
///
/// External links point at a relationship record through `rel_id`;
/// links into the workbook itself carry a `location` instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlink {
    /// Anchor cell reference
    pub reference: String,
    /// Relationship id of the link target
    pub rel_id: Option<String>,
    /// In-document target (e.g. "Sheet2!A1")
    pub location: Option<String>,
    /// Display text
    pub display: Option<String>,
    /// Tooltip text
    pub tooltip: Option<String>,
}

impl Hyperlink {
    /// Create an external hyperlink backed by a relationship record
    pub fn external<R: Into<String>, I: Into<String>>(reference: R, rel_id: I) -> Self {
        Self {
            reference: reference.into(),
            rel_id: Some(rel_id.into()),
            ..Default::default()
        }
    }

    /// Create a hyperlink to a location inside the workbook
    pub fn internal<R: Into<String>, L: Into<String>>(reference: R, location: L) -> Self {
        Self {
            reference: reference.into(),
            location: Some(location.into()),
            ..Default::default()
        }
    }
}

/// The hyperlink container of a worksheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlinks {
    pub links: Vec<Hyperlink>,
}

impl Hyperlinks {
    /// Create a container from a list of links
    pub fn new(links: Vec<Hyperlink>) -> Self {
        Self { links }
    }

    /// Number of hyperlinks
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if there are no hyperlinks
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
