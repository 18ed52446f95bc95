//! Machine-readable audit report.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::SourceMetadata;
use crate::validation::Classification;

/// Per-category totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyCounts {
    pub email_in_contact_name: usize,
    pub numeric_facility_id: usize,
    pub malformed_rows: usize,
    pub duplicate_groups: usize,
    pub shifted_email_rows: usize,
}

impl AnomalyCounts {
    /// Tally a classification.
    pub fn from_classification(result: &Classification) -> Self {
        Self {
            email_in_contact_name: result.email_in_contact_name.len(),
            numeric_facility_id: result.numeric_facility_id.len(),
            malformed_rows: result.malformed_rows.len(),
            duplicate_groups: result.duplicates.len(),
            shifted_email_rows: result.shifted_email_rows.len(),
        }
    }
}

/// The JSON twin of the text summary, with every hit uncapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Provenance of the audited file.
    pub source: SourceMetadata,
    /// Totals per category.
    pub counts: AnomalyCounts,
    /// Full classifier output.
    pub classification: Classification,
}

impl AuditReport {
    /// Assemble a report.
    pub fn new(source: SourceMetadata, classification: Classification) -> Self {
        let counts = AnomalyCounts::from_classification(&classification);
        Self {
            source,
            counts,
            classification,
        }
    }

    /// Write the report as pretty JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
