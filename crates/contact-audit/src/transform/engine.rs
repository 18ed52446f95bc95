//! Dry-run engine: proposes a corrected row for every data row.
//!
//! Fields are resolved by header name. The source rows are never touched;
//! each proposal is a fresh row under the extended header.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{AuditError, Result};
use crate::input::{Dataset, RawRow};
use crate::schema::{CONTACT_EMAIL, CONTACT_NAME, FACILITY_ID, FieldMap, Header, NEEDS_REVIEW};

use super::operations::{DryRun, FieldChange, ProposedRow, ReviewReason, ReviewReasons};

/// Something shaped like an address: non-space, `@`, non-space.
static EMAIL_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());

/// Engine for computing proposed corrections against one header.
pub struct TransformEngine {
    header: Header,
    proposed_header: Header,
}

impl TransformEngine {
    /// Create an engine for rows described by `header`.
    pub fn new(header: Header) -> Self {
        let proposed_header = header.extended();
        Self {
            header,
            proposed_header,
        }
    }

    /// Create an engine from a dataset's first line.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let header = dataset
            .header()
            .ok_or_else(|| AuditError::EmptyData("no data".to_string()))?;
        Ok(Self::new(Header::new(header.fields.clone())))
    }

    /// The source header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The extended header proposals are rendered against.
    pub fn proposed_header(&self) -> &Header {
        &self.proposed_header
    }

    /// Propose a correction for every row.
    pub fn run(&self, rows: &[RawRow]) -> DryRun {
        let rows: Vec<ProposedRow> = rows.iter().map(|row| self.propose(row)).collect();
        debug!(
            rows = rows.len(),
            changed = rows.iter().filter(|r| r.is_changed()).count(),
            "dry run complete"
        );

        DryRun {
            header: self.header.clone(),
            proposed_header: self.proposed_header.clone(),
            rows,
        }
    }

    /// Propose a correction for one data row.
    pub fn propose(&self, row: &RawRow) -> ProposedRow {
        let padded = self.header.pad(&row.fields);
        let mut fields = self.header.field_map(&padded);
        let mut reasons = ReviewReasons::new();
        let mut changes = Vec::new();

        // contactEmail is always recomputed; an existing value is not carried over.
        let mut contact_email = String::new();

        let contact_name = fields.get(CONTACT_NAME).trim().to_string();
        if !contact_name.is_empty() && EMAIL_LIKE.is_match(&contact_name) {
            changes.push(FieldChange {
                column: CONTACT_NAME.to_string(),
                original_value: fields.get(CONTACT_NAME).to_string(),
                new_value: String::new(),
                reason: ReviewReason::MovedEmailFromName,
            });
            changes.push(FieldChange {
                column: CONTACT_EMAIL.to_string(),
                original_value: fields.get(CONTACT_EMAIL).to_string(),
                new_value: contact_name.clone(),
                reason: ReviewReason::MovedEmailFromName,
            });
            debug!(line = row.line, email = %contact_name, "moving email out of contact name");

            contact_email = contact_name;
            fields.set(CONTACT_NAME, "");
            reasons.push(ReviewReason::MovedEmailFromName);
        }

        let facility_id = fields.get(FACILITY_ID).trim();
        if !facility_id.is_empty() && facility_id.chars().all(|c| c.is_ascii_digit()) {
            reasons.push(ReviewReason::NumericFacilityId);
        }

        let values = self.render(&fields, &contact_email, &reasons);
        let original = (0..self.header.len())
            .map(|idx| padded.get(idx).cloned().unwrap_or_default())
            .collect();

        ProposedRow {
            line: row.line,
            original,
            values,
            reasons,
            changes,
        }
    }

    fn render(&self, fields: &FieldMap, contact_email: &str, reasons: &ReviewReasons) -> Vec<String> {
        self.proposed_header
            .names()
            .iter()
            .map(|name| match name.as_str() {
                CONTACT_EMAIL => contact_email.to_string(),
                NEEDS_REVIEW => reasons.to_string(),
                other => fields.get(other).to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(names: &[&str]) -> TransformEngine {
        TransformEngine::new(Header::new(names.iter().map(|s| s.to_string()).collect()))
    }

    fn row(line: usize, values: &[&str]) -> RawRow {
        RawRow::new(line, values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_moves_email_out_of_name() {
        let engine = engine(&["facilityId", "contactName"]);
        let proposed = engine.propose(&row(2, &["F10", "a@b.com"]));

        assert_eq!(proposed.values, vec!["F10", "", "a@b.com", "movedEmailFromName"]);
        assert_eq!(proposed.changes.len(), 2);
        assert!(proposed.is_changed());
    }

    #[test]
    fn test_numeric_facility_id_is_advisory() {
        let engine = engine(&["facilityId", "contactName"]);
        let proposed = engine.propose(&row(3, &["007", "John"]));

        assert_eq!(proposed.values, vec!["007", "John", "", "numericFacilityId"]);
        assert!(proposed.changes.is_empty());
    }

    #[test]
    fn test_both_reasons_in_detection_order() {
        let engine = engine(&["facilityId", "contactName", "createdAt"]);
        let proposed = engine.propose(&row(2, &["10", "jane@x.com", "2020"]));

        assert_eq!(
            proposed.values,
            vec!["10", "", "jane@x.com", "2020", "movedEmailFromName;numericFacilityId"]
        );
    }

    #[test]
    fn test_second_pass_does_not_move_again() {
        let first = engine(&["facilityId", "contactName"]);
        let proposed = first.propose(&row(2, &["10", "a@b.com"]));

        let second = TransformEngine::new(first.proposed_header().clone());
        let again = second.propose(&RawRow::new(2, proposed.values.clone()));

        assert!(!again.reasons.contains(ReviewReason::MovedEmailFromName));
        assert!(again.reasons.contains(ReviewReason::NumericFacilityId));
        assert!(again.changes.is_empty());
        assert_eq!(again.values, vec!["10", "", "", "numericFacilityId"]);
    }

    #[test]
    fn test_existing_contact_email_not_carried_over() {
        let engine = engine(&["facilityId", "contactName", "contactEmail"]);
        let proposed = engine.propose(&row(2, &["F1", "Jane", "old@x.com"]));

        assert_eq!(proposed.original, vec!["F1", "Jane", "old@x.com"]);
        assert_eq!(proposed.values, vec!["F1", "Jane", "", ""]);
        assert!(proposed.changes.is_empty());
    }

    #[test]
    fn test_moved_email_records_previous_contact_email() {
        let engine = engine(&["facilityId", "contactName", "contactEmail"]);
        let proposed = engine.propose(&row(2, &["F1", "jane@x.com", "old@x.com"]));

        assert_eq!(proposed.values, vec!["F1", "", "jane@x.com", "movedEmailFromName"]);
        assert_eq!(proposed.changes[1].column, "contactEmail");
        assert_eq!(proposed.changes[1].original_value, "old@x.com");
        assert_eq!(proposed.changes[1].new_value, "jane@x.com");
    }

    #[test]
    fn test_bare_at_sign_is_not_moved() {
        let engine = engine(&["facilityId", "contactName"]);
        let proposed = engine.propose(&row(2, &["F1", "@"]));

        assert!(!proposed.is_changed());
        assert_eq!(proposed.values[1], "@");
    }

    #[test]
    fn test_short_row_padded_before_lookup() {
        let engine = engine(&["facilityId", "contactName", "createdAt"]);
        let proposed = engine.propose(&row(2, &["10"]));

        assert_eq!(proposed.original, vec!["10", "", ""]);
        assert_eq!(proposed.values, vec!["10", "", "", "", "numericFacilityId"]);
    }

    #[test]
    fn test_long_row_original_cut_to_header() {
        let engine = engine(&["facilityId", "contactName"]);
        let proposed = engine.propose(&row(2, &["F1", "Jane", "stray"]));

        assert_eq!(proposed.original, vec!["F1", "Jane"]);
        assert_eq!(proposed.values, vec!["F1", "Jane", "", ""]);
    }

    #[test]
    fn test_clean_row_unchanged() {
        let engine = engine(&["facilityId", "contactName"]);
        let proposed = engine.propose(&row(2, &["F1", "Jane Doe"]));

        assert!(!proposed.is_changed());
        assert_eq!(proposed.values, vec!["F1", "Jane Doe", "", ""]);
    }

    #[test]
    fn test_from_empty_dataset_fails() {
        let dataset = Dataset::new(
            Vec::new(),
            crate::input::SourceMetadata::new("x.tsv".into(), String::new(), 0, 0),
        );

        assert!(TransformEngine::from_dataset(&dataset).is_err());
    }
}
