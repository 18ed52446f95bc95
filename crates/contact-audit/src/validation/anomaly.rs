//! Anomaly tags and the hits that carry their context.

use serde::{Deserialize, Serialize};

use crate::input::RawRow;

/// Kind of anomaly detected on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnomalyKind {
    /// The contact name field holds something with an `@` in it.
    EmailInContactName,
    /// The facility id is nothing but decimal digits.
    NumericFacilityId,
    /// The row has fewer fields than expected.
    MalformedRow,
    /// Another row has the same (facilityId, contactName) pair.
    DuplicateKey,
}

impl AnomalyKind {
    /// All kinds, in reporting order.
    pub const ALL: [AnomalyKind; 4] = [
        AnomalyKind::EmailInContactName,
        AnomalyKind::NumericFacilityId,
        AnomalyKind::MalformedRow,
        AnomalyKind::DuplicateKey,
    ];

    /// The tag as written in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::EmailInContactName => "emailInContactName",
            AnomalyKind::NumericFacilityId => "numericFacilityId",
            AnomalyKind::MalformedRow => "malformedRow",
            AnomalyKind::DuplicateKey => "duplicateKey",
        }
    }

    /// Get a human-readable label for the anomaly kind.
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyKind::EmailInContactName => "Email in contact name",
            AnomalyKind::NumericFacilityId => "Numeric facility id",
            AnomalyKind::MalformedRow => "Malformed row",
            AnomalyKind::DuplicateKey => "Duplicate key",
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row flagged on its facility id or contact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactHit {
    /// Source line number.
    pub line: usize,
    /// Trimmed facility id.
    pub facility_id: String,
    /// Trimmed contact name.
    pub contact_name: String,
}

/// A row with too few fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedRow {
    /// Source line number.
    pub line: usize,
    /// The row's fields, untouched.
    pub fields: Vec<String>,
}

impl MalformedRow {
    pub(crate) fn from_row(row: &RawRow) -> Self {
        Self {
            line: row.line,
            fields: row.fields.clone(),
        }
    }

    /// Number of fields on the row.
    pub fn cols(&self) -> usize {
        self.fields.len()
    }

    /// Fields joined with `|`.
    pub fn raw(&self) -> String {
        self.fields.join("|")
    }
}

/// A (facilityId, contactName) pair seen on more than one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    /// Trimmed facility id.
    pub facility_id: String,
    /// Trimmed contact name.
    pub contact_name: String,
    /// Number of rows sharing the pair.
    pub count: usize,
    /// Lines the pair appears on, in order.
    pub lines: Vec<usize>,
}
