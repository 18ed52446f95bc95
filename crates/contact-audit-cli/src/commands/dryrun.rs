//! Dry-run command - propose corrected rows and write before/after tables.

use colored::Colorize;
use contact_audit::{AuditConfig, ContactAudit, ReviewReason};
use tracing::warn;

pub fn run(
    config: AuditConfig,
    show_changes: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Dry run on".cyan().bold(),
        config.input.display().to_string().white()
    );

    let audit = ContactAudit::with_config(config);
    let outcome = audit.dry_run().inspect_err(|e| {
        if e.is_empty_data() {
            warn!("dry run stopped: source has no data");
        }
    })?;
    let dry_run = &outcome.dry_run;

    if verbose {
        println!("  proposed header: {}", dry_run.proposed_header.names().join(", "));
    }

    println!(
        "{} of {} rows need review",
        dry_run.changed_count().to_string().white().bold(),
        dry_run.rows.len()
    );
    println!(
        "  moved email from name: {}",
        dry_run
            .reason_count(ReviewReason::MovedEmailFromName)
            .to_string()
            .yellow()
    );
    println!(
        "  numeric facility id:   {}",
        dry_run
            .reason_count(ReviewReason::NumericFacilityId)
            .to_string()
            .yellow()
    );

    if show_changes {
        println!();
        for row in dry_run.changed() {
            println!("{} {}", format!("line {}", row.line).cyan(), row.reasons);
            for change in &row.changes {
                println!(
                    "  {}: {} {} {}",
                    change.column,
                    format!("{:?}", change.original_value).red(),
                    "->".dimmed(),
                    format!("{:?}", change.new_value).green()
                );
            }
        }
    }

    println!();
    println!("{}", "Wrote".green().bold());
    for path in &outcome.written {
        println!("  {}", path.display().to_string().white());
    }

    Ok(())
}
