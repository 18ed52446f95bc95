//! CLI command implementations.

pub mod analyze;
pub mod dryrun;

use contact_audit::AuditConfig;
use tracing::debug;

use crate::cli::PathArgs;

/// Build the library configuration from the command-line paths.
pub fn audit_config(paths: &PathArgs) -> AuditConfig {
    let config = AuditConfig {
        input: paths.input.clone(),
        output_dir: paths.out_dir.clone(),
        output_prefix: paths.prefix.clone(),
        ..AuditConfig::default()
    };
    debug!(
        input = %config.input.display(),
        out_dir = %config.output_dir.display(),
        prefix = %config.output_prefix,
        "resolved audit configuration"
    );
    config
}
