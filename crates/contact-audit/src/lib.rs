//! contact-audit: audit a tab-separated contact export and propose corrections.
//!
//! Two independent pipelines run over the same loaded rows:
//!
//! - **Analysis**: classify each data row (malformed shape, numeric facility
//!   id, email stored in the contact name), group duplicate
//!   (facilityId, contactName) keys, and write a text summary plus flat tables.
//! - **Dry run**: compute a proposed row per data row under an extended
//!   header (`contactEmail`, `needsReview`) and write before/after tables.
//!
//! The source file is never modified.
//!
//! # Example
//!
//! ```no_run
//! use contact_audit::{AuditConfig, ContactAudit};
//!
//! let audit = ContactAudit::with_config(AuditConfig {
//!     input: "contacts.tsv".into(),
//!     ..AuditConfig::default()
//! });
//!
//! if let Some(outcome) = audit.analyze().unwrap() {
//!     println!("Malformed rows: {}", outcome.classification.malformed_rows.len());
//! }
//! let dry_run = audit.dry_run().unwrap();
//! println!("Rows needing review: {}", dry_run.dry_run.changed_count());
//! ```

pub mod error;
pub mod input;
pub mod report;
pub mod schema;
pub mod transform;
pub mod validation;

mod audit;

pub use crate::audit::{
    AnalysisOutcome, AuditConfig, ContactAudit, DEFAULT_INPUT, DEFAULT_OUTPUT_PREFIX,
    DryRunOutcome,
};
pub use error::{AuditError, Result};
pub use input::{Dataset, Loader, LoaderConfig, RawRow, SourceMetadata};
pub use report::{AuditReport, OutputPaths, ReportConfig, SummaryReport};
pub use schema::{FieldMap, Header};
pub use transform::{DryRun, ProposedRow, ReviewReason, ReviewReasons, TransformEngine};
pub use validation::{
    AnomalyKind, Classification, Classifier, ClassifierConfig, ContactHit, DuplicateGroup,
    MalformedRow,
};
