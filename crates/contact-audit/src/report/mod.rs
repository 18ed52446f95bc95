//! Rendering of classifier and dry-run results.

mod export;
mod json;
mod summary;

use std::path::{Path, PathBuf};

pub use export::{
    to_file, write_before_after, write_contact_hits, write_duplicates, write_malformed,
    write_proposed,
};
pub use json::{AnomalyCounts, AuditReport};
pub use summary::{ReportConfig, SummaryReport};

/// File names for every output of a run, derived from one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub summary_json: PathBuf,
    pub email_in_contact: PathBuf,
    pub numeric_facility_id: PathBuf,
    pub duplicates: PathBuf,
    pub malformed_rows: PathBuf,
    pub dryrun_before_after: PathBuf,
    pub dryrun_proposed: PathBuf,
}

impl OutputPaths {
    /// Paths `<dir>/<prefix>_*`.
    pub fn new(dir: impl AsRef<Path>, prefix: &str) -> Self {
        let dir = dir.as_ref();
        let path = |suffix: &str| dir.join(format!("{}_{}", prefix, suffix));

        Self {
            summary: path("summary.txt"),
            summary_json: path("summary.json"),
            email_in_contact: path("email_in_contact.csv"),
            numeric_facility_id: path("numeric_facilityid.csv"),
            duplicates: path("duplicates.csv"),
            malformed_rows: path("malformed_rows.csv"),
            dryrun_before_after: path("dryrun_before_after.csv"),
            dryrun_proposed: path("dryrun_proposed.csv"),
        }
    }

    /// Classifier outputs, in write order.
    pub fn analysis(&self) -> [&Path; 6] {
        [
            &self.summary,
            &self.summary_json,
            &self.email_in_contact,
            &self.numeric_facility_id,
            &self.duplicates,
            &self.malformed_rows,
        ]
    }

    /// Dry-run outputs, in write order.
    pub fn dry_run(&self) -> [&Path; 2] {
        [&self.dryrun_before_after, &self.dryrun_proposed]
    }
}
