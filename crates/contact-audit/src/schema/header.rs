//! Header-driven field resolution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_EMAIL, CONTACT_NAME, FieldMap, NEEDS_REVIEW};

/// The header line: field names in source order plus a name→position index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Header {
    names: Vec<String>,
    /// Built once; a name repeated in the header resolves to its last position.
    positions: IndexMap<String, usize>,
}

impl Header {
    /// Build a header from its field names.
    pub fn new(names: Vec<String>) -> Self {
        let mut positions = IndexMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            positions.insert(name.clone(), idx);
        }
        Self { names, positions }
    }

    /// Field names in header order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header declares no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether a field name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Position a field name resolves to.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Pad a row with empty strings up to the header length.
    ///
    /// Rows longer than the header are returned unchanged.
    pub fn pad(&self, fields: &[String]) -> Vec<String> {
        let mut padded = fields.to_vec();
        if padded.len() < self.names.len() {
            padded.resize(self.names.len(), String::new());
        }
        padded
    }

    /// Resolve every declared name against a row.
    pub fn field_map(&self, fields: &[String]) -> FieldMap {
        let mut map = FieldMap::with_capacity(self.positions.len());
        for (name, &idx) in &self.positions {
            let value = fields.get(idx).cloned().unwrap_or_default();
            map.set(name.clone(), value);
        }
        map
    }

    /// The header used for proposed rows.
    ///
    /// `contactEmail` goes right after `contactName` (or at the end when
    /// there is no `contactName`), and `needsReview` is appended. Names
    /// already present are not added twice.
    pub fn extended(&self) -> Header {
        let mut names = self.names.clone();

        if !self.contains(CONTACT_EMAIL) {
            match names.iter().position(|n| n == CONTACT_NAME) {
                Some(idx) => names.insert(idx + 1, CONTACT_EMAIL.to_string()),
                None => names.push(CONTACT_EMAIL.to_string()),
            }
        }
        if !self.contains(NEEDS_REVIEW) {
            names.push(NEEDS_REVIEW.to_string());
        }

        Header::new(names)
    }
}

impl From<Vec<String>> for Header {
    fn from(names: Vec<String>) -> Self {
        Header::new(names)
    }
}

impl From<Header> for Vec<String> {
    fn from(header: Header) -> Self {
        header.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Header {
        Header::new(names.iter().map(|s| s.to_string()).collect())
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extended_inserts_after_contact_name() {
        let extended = header(&["facilityId", "contactName", "createdAt"]).extended();

        assert_eq!(
            extended.names(),
            &["facilityId", "contactName", "contactEmail", "createdAt", "needsReview"]
        );
    }

    #[test]
    fn test_extended_appends_without_contact_name() {
        let extended = header(&["facilityId", "createdAt"]).extended();

        assert_eq!(
            extended.names(),
            &["facilityId", "createdAt", "contactEmail", "needsReview"]
        );
    }

    #[test]
    fn test_extended_is_stable() {
        let once = header(&["facilityId", "contactName"]).extended();
        let twice = once.extended();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_pad_short_row() {
        let h = header(&["facilityId", "contactName", "createdAt"]);

        assert_eq!(h.pad(&row(&["10"])), row(&["10", "", ""]));
    }

    #[test]
    fn test_pad_never_truncates() {
        let h = header(&["facilityId"]);

        assert_eq!(h.pad(&row(&["10", "extra"])), row(&["10", "extra"]));
    }

    #[test]
    fn test_field_map_defaults_to_empty() {
        let h = header(&["facilityId", "contactName", "createdAt"]);
        let map = h.field_map(&row(&["10"]));

        assert_eq!(map.get("facilityId"), "10");
        assert_eq!(map.get("contactName"), "");
        assert_eq!(map.get("createdAt"), "");
        assert_eq!(map.get("notAField"), "");
    }

    #[test]
    fn test_duplicate_name_resolves_to_last_position() {
        let h = header(&["note", "facilityId", "note"]);

        assert_eq!(h.position("note"), Some(2));
        assert_eq!(h.field_map(&row(&["a", "1", "b"])).get("note"), "b");
    }
}
