//! Well-known field names and the per-row field map.

use indexmap::IndexMap;

/// Facility identifier field.
pub const FACILITY_ID: &str = "facilityId";
/// Contact name field.
pub const CONTACT_NAME: &str = "contactName";
/// Field that receives an email moved out of the contact name.
pub const CONTACT_EMAIL: &str = "contactEmail";
/// Field holding the `;`-joined review reasons.
pub const NEEDS_REVIEW: &str = "needsReview";

/// A row's values keyed by header field name.
///
/// Lookups never fail: any name the header did not declare reads as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: IndexMap<String, String>,
}

impl FieldMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
        }
    }

    /// Value for a field name, or `""`.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(|s| s.as_str()).unwrap_or("")
    }

    /// Whether the header declared this name.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Overwrite (or add) a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Iterate `(name, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
