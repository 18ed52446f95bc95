//! Main audit entry point: wires loader, classifier, transformer and reporter.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{AuditError, Result};
use crate::input::{Dataset, Loader, LoaderConfig, SourceMetadata};
use crate::report::{self, AuditReport, OutputPaths, ReportConfig, SummaryReport};
use crate::transform::{DryRun, TransformEngine};
use crate::validation::{Classification, Classifier, ClassifierConfig};

/// Source file read when no other input is configured.
pub const DEFAULT_INPUT: &str = "tmp_contacts.tsv";
/// Prefix shared by every output file.
pub const DEFAULT_OUTPUT_PREFIX: &str = "analysis_contacts";

/// Configuration for an audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Tab-separated source file.
    pub input: PathBuf,
    /// Directory outputs are written to.
    pub output_dir: PathBuf,
    /// Prefix for every output file name.
    pub output_prefix: String,
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Classifier configuration.
    pub classifier: ClassifierConfig,
    /// Summary rendering configuration.
    pub report: ReportConfig,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            loader: LoaderConfig::default(),
            classifier: ClassifierConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Result of the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// What the classifier found.
    pub classification: Classification,
    /// Files written, in order.
    pub written: Vec<PathBuf>,
}

/// Result of the dry-run pipeline.
#[derive(Debug, Clone)]
pub struct DryRunOutcome {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Proposed rows.
    pub dry_run: DryRun,
    /// Files written, in order.
    pub written: Vec<PathBuf>,
}

/// Runs the analysis and dry-run pipelines against one source file.
pub struct ContactAudit {
    config: AuditConfig,
    loader: Loader,
    classifier: Classifier,
}

impl ContactAudit {
    /// Create an audit with default configuration.
    pub fn new() -> Self {
        Self::with_config(AuditConfig::default())
    }

    /// Create an audit with custom configuration.
    pub fn with_config(config: AuditConfig) -> Self {
        let loader = Loader::with_config(config.loader.clone());
        let classifier = Classifier::with_config(config.classifier.clone());
        Self {
            config,
            loader,
            classifier,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Where this audit writes its outputs.
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(&self.config.output_dir, &self.config.output_prefix)
    }

    /// Classify the source and write the summary plus the four tables.
    ///
    /// Returns `Ok(None)` without writing anything when the source has no
    /// lines at all.
    pub fn analyze(&self) -> Result<Option<AnalysisOutcome>> {
        self.validate_config()?;

        let dataset = match self.loader.load(&self.config.input) {
            Ok(dataset) => dataset,
            Err(e) if e.is_empty_data() => {
                warn!(input = %self.config.input.display(), "no data, skipping analysis");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let classification = self.classifier.classify(&dataset);
        let paths = self.output_paths();

        report::to_file(&paths.summary, |w| {
            SummaryReport::write(w, &classification, &self.config.report)
                .map_err(|e| AuditError::io(&paths.summary, e))
        })?;
        info!(path = %paths.summary.display(), "wrote summary");

        let audit_report = AuditReport::new(dataset.source.clone(), classification.clone());
        report::to_file(&paths.summary_json, |w| audit_report.write_json(w))?;
        info!(path = %paths.summary_json.display(), "wrote JSON report");

        report::to_file(&paths.email_in_contact, |w| {
            report::write_contact_hits(w, &classification.email_in_contact_name)
        })?;
        report::to_file(&paths.numeric_facility_id, |w| {
            report::write_contact_hits(w, &classification.numeric_facility_id)
        })?;
        report::to_file(&paths.duplicates, |w| {
            report::write_duplicates(w, &classification.duplicates)
        })?;
        report::to_file(&paths.malformed_rows, |w| {
            report::write_malformed(w, &classification.malformed_rows)
        })?;
        info!(
            dir = %self.config.output_dir.display(),
            rows = classification.total_rows,
            "wrote analysis tables"
        );

        Ok(Some(AnalysisOutcome {
            source: dataset.source,
            classification,
            written: paths.analysis().iter().map(|p| p.to_path_buf()).collect(),
        }))
    }

    /// Propose corrections and write the before/after and full tables.
    ///
    /// An empty source is an error here; nothing is written.
    pub fn dry_run(&self) -> Result<DryRunOutcome> {
        self.validate_config()?;

        let dataset = self.loader.load(&self.config.input)?;
        let dry_run = Self::propose(&dataset)?;
        let paths = self.output_paths();

        report::to_file(&paths.dryrun_before_after, |w| {
            report::write_before_after(w, &dry_run)
        })?;
        report::to_file(&paths.dryrun_proposed, |w| report::write_proposed(w, &dry_run))?;
        info!(
            changed = dry_run.changed_count(),
            rows = dry_run.rows.len(),
            "wrote dry-run tables"
        );

        Ok(DryRunOutcome {
            source: dataset.source,
            dry_run,
            written: paths.dry_run().iter().map(|p| p.to_path_buf()).collect(),
        })
    }

    /// Run the transformer over a loaded dataset.
    pub fn propose(dataset: &Dataset) -> Result<DryRun> {
        let engine = TransformEngine::from_dataset(dataset)?;
        Ok(engine.run(dataset.data_rows()))
    }

    fn validate_config(&self) -> Result<()> {
        if self.config.output_prefix.trim().is_empty() {
            return Err(AuditError::Config(
                "output prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ContactAudit {
    fn default() -> Self {
        Self::new()
    }
}
