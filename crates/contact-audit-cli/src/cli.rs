//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use contact_audit::{DEFAULT_INPUT, DEFAULT_OUTPUT_PREFIX};
use std::path::PathBuf;

/// contact-audit: find broken rows in a contact export and propose fixes
#[derive(Parser)]
#[command(name = "contact-audit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Pipeline to run (both when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where to read from and where to write to.
#[derive(Args, Clone, Debug)]
pub struct PathArgs {
    /// Tab-separated contact export
    #[arg(short, long, global = true, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory for the generated reports
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Prefix for every generated file name
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT_PREFIX)]
    pub prefix: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify rows and write the summary and anomaly tables
    Analyze,

    /// Propose corrected rows without touching the source file
    Dryrun {
        /// Print every changed row
        #[arg(long)]
        show_changes: bool,
    },
}
