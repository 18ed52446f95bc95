//! Row classifier: per-row anomaly checks plus dataset-wide duplicate keys.
//!
//! Facility id and contact name are read by field position, not through
//! the header. The transformer resolves the same fields by name, so the
//! two pipelines disagree whenever the header puts those fields elsewhere.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{Dataset, RawRow};

use super::anomaly::{AnomalyKind, ContactHit, DuplicateGroup, MalformedRow};

/// One or more ASCII digits and nothing else.
static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// 0-based field position of the facility id.
    pub facility_id_position: usize,
    /// 0-based field position of the contact name.
    pub contact_name_position: usize,
    /// Rows with fewer fields are malformed and get no other checks.
    pub min_fields: usize,
    /// Rows with fewer fields are malformed, after the other checks ran.
    pub expected_fields: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            facility_id_position: 1,
            contact_name_position: 2,
            min_fields: 3,
            expected_fields: 7,
        }
    }
}

/// Everything the classifier found in one dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Number of data rows (excluding header).
    pub total_rows: usize,
    /// Field count → number of lines with that count, header included.
    pub column_counts: BTreeMap<usize, usize>,
    /// Rows whose contact name contains `@`.
    pub email_in_contact_name: Vec<ContactHit>,
    /// Rows whose facility id is all digits.
    pub numeric_facility_id: Vec<ContactHit>,
    /// Rows with too few fields.
    pub malformed_rows: Vec<MalformedRow>,
    /// Key pairs seen more than once, in first-seen order.
    pub duplicates: Vec<DuplicateGroup>,
    /// Lines with an `@` in a field past the expected width.
    pub shifted_email_rows: Vec<usize>,
    /// Tags assigned per line; clean lines are absent.
    pub row_tags: IndexMap<usize, Vec<AnomalyKind>>,
}

impl Classification {
    /// Tags assigned to a line (empty when the line is clean).
    pub fn tags_for(&self, line: usize) -> &[AnomalyKind] {
        self.row_tags.get(&line).map(|t| t.as_slice()).unwrap_or(&[])
    }

    /// Number of rows carrying a given tag.
    pub fn count(&self, kind: AnomalyKind) -> usize {
        match kind {
            AnomalyKind::EmailInContactName => self.email_in_contact_name.len(),
            AnomalyKind::NumericFacilityId => self.numeric_facility_id.len(),
            AnomalyKind::MalformedRow => self.malformed_rows.len(),
            AnomalyKind::DuplicateKey => self.duplicates.iter().map(|g| g.count).sum(),
        }
    }

    /// Whether nothing at all was flagged.
    pub fn is_clean(&self) -> bool {
        self.row_tags.is_empty()
    }
}

/// Scans data rows and assigns anomaly tags.
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier with default configuration.
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    /// Create a classifier with custom configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify every data row of a dataset.
    pub fn classify(&self, dataset: &Dataset) -> Classification {
        let mut result = Classification {
            total_rows: dataset.row_count(),
            ..Classification::default()
        };

        for row in &dataset.rows {
            *result.column_counts.entry(row.len()).or_insert(0) += 1;
        }

        let mut keys: IndexMap<(String, String), Vec<usize>> = IndexMap::new();

        for row in dataset.data_rows() {
            let tags = self.classify_row(row, &mut result, &mut keys);
            if !tags.is_empty() {
                result.row_tags.insert(row.line, tags);
            }
        }

        for ((facility_id, contact_name), lines) in keys {
            if lines.len() < 2 {
                continue;
            }
            for &line in &lines {
                result
                    .row_tags
                    .entry(line)
                    .or_default()
                    .push(AnomalyKind::DuplicateKey);
            }
            debug!(%facility_id, %contact_name, count = lines.len(), "duplicate key");
            result.duplicates.push(DuplicateGroup {
                facility_id,
                contact_name,
                count: lines.len(),
                lines,
            });
        }

        // Duplicate tags may have created entries for lines out of order.
        result.row_tags.sort_keys();
        result
    }

    fn classify_row(
        &self,
        row: &RawRow,
        result: &mut Classification,
        keys: &mut IndexMap<(String, String), Vec<usize>>,
    ) -> Vec<AnomalyKind> {
        let mut tags = Vec::new();

        if row.len() < self.config.min_fields {
            debug!(line = row.line, cols = row.len(), "short row");
            result.malformed_rows.push(MalformedRow::from_row(row));
            tags.push(AnomalyKind::MalformedRow);
            return tags;
        }

        let facility_id = row
            .get(self.config.facility_id_position)
            .unwrap_or("")
            .trim()
            .to_string();
        let contact_name = row
            .get(self.config.contact_name_position)
            .unwrap_or("")
            .trim()
            .to_string();

        if is_numeric_id(&facility_id) {
            debug!(line = row.line, %facility_id, "numeric facility id");
            result.numeric_facility_id.push(ContactHit {
                line: row.line,
                facility_id: facility_id.clone(),
                contact_name: contact_name.clone(),
            });
            tags.push(AnomalyKind::NumericFacilityId);
        }

        if contact_name.contains('@') {
            debug!(line = row.line, %contact_name, "email in contact name");
            result.email_in_contact_name.push(ContactHit {
                line: row.line,
                facility_id: facility_id.clone(),
                contact_name: contact_name.clone(),
            });
            tags.push(AnomalyKind::EmailInContactName);
        }

        let tail_start = self.config.expected_fields.saturating_sub(1);
        if row.fields.iter().skip(tail_start).any(|f| f.contains('@')) {
            result.shifted_email_rows.push(row.line);
        }

        keys.entry((facility_id, contact_name))
            .or_default()
            .push(row.line);

        if row.len() < self.config.expected_fields {
            debug!(line = row.line, cols = row.len(), "row narrower than expected");
            result.malformed_rows.push(MalformedRow::from_row(row));
            tags.push(AnomalyKind::MalformedRow);
        }

        tags
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a (trimmed) facility id is purely decimal digits.
pub fn is_numeric_id(value: &str) -> bool {
    DIGITS_ONLY.is_match(value)
}
