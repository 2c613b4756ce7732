//! Sheet relationship records
//!
//! A worksheet refers to external targets (hyperlink URLs, drawings, ...)
//! through relationship records identified by an id such as `rId3`. The
//! adjustment engine only ever needs to drop records, which is what
//! [`RelationshipStore`] exposes.

use ahash::AHashMap;

/// Something that can drop a sheet's relationship record by id
pub trait RelationshipStore {
    /// Remove the relationship `rel_id` belonging to `sheet`
    ///
    /// Removing an id that does not exist is not an error.
    fn delete_relationship(&mut self, sheet: &str, rel_id: &str);
}

/// A single relationship record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    /// Record id, unique within its sheet (e.g. "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path or URL
    pub target: String,
    /// "External" for targets outside the package
    pub target_mode: Option<String>,
}

impl Relationship {
    /// Create an external hyperlink relationship
    pub fn hyperlink<I: Into<String>, T: Into<String>>(id: I, target: T) -> Self {
        Self {
            id: id.into(),
            rel_type: HYPERLINK_REL_TYPE.to_string(),
            target: target.into(),
            target_mode: Some("External".to_string()),
        }
    }
}

/// Relationship type of external hyperlinks
pub const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Relationship records of every sheet, keyed by sheet name
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationships {
    by_sheet: AHashMap<String, Vec<Relationship>>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to a sheet
    pub fn add<S: Into<String>>(&mut self, sheet: S, rel: Relationship) {
        self.by_sheet.entry(sheet.into()).or_default().push(rel);
    }

    /// All records of a sheet
    pub fn for_sheet(&self, sheet: &str) -> &[Relationship] {
        self.by_sheet.get(sheet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a record by sheet and id
    pub fn get(&self, sheet: &str, rel_id: &str) -> Option<&Relationship> {
        self.for_sheet(sheet).iter().find(|r| r.id == rel_id)
    }

    /// Total number of records across sheets
    pub fn len(&self) -> usize {
        self.by_sheet.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RelationshipStore for Relationships {
    fn delete_relationship(&mut self, sheet: &str, rel_id: &str) {
        if let Some(rels) = self.by_sheet.get_mut(sheet) {
            rels.retain(|r| r.id != rel_id);
            if rels.is_empty() {
                self.by_sheet.remove(sheet);
            }
        }
    }
}
