//! Analyze command - classify rows and write the summary and tables.

use colored::Colorize;
use contact_audit::{AnomalyKind, AuditConfig, ContactAudit};

pub fn run(config: AuditConfig, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        config.input.display().to_string().white()
    );

    let audit = ContactAudit::with_config(config);

    let Some(outcome) = audit.analyze()? else {
        println!("{}", "No data".yellow());
        return Ok(());
    };
    let result = &outcome.classification;

    if verbose {
        println!();
        println!("{}", "Column counts:".yellow().bold());
        for (cols, lines) in &result.column_counts {
            println!("  {:>3} columns: {} lines", cols, lines);
        }
        println!(
            "  source sha256 {} ({} bytes)",
            outcome.source.hash.dimmed(),
            outcome.source.size_bytes
        );
        println!();
    }

    println!(
        "Checked {} rows",
        result.total_rows.to_string().white().bold()
    );
    for kind in AnomalyKind::ALL {
        let count = result.count(kind);
        let count = if count == 0 {
            count.to_string().green()
        } else {
            count.to_string().yellow()
        };
        println!("  {:32} {}", kind.label(), count);
    }
    println!(
        "  {:32} {}",
        "Duplicate groups",
        result.duplicates.len().to_string().white()
    );
    if !result.shifted_email_rows.is_empty() {
        println!(
            "  {:32} {}",
            "Email in a shifted column",
            result.shifted_email_rows.len().to_string().red()
        );
    }

    println!();
    println!("{}", "Wrote".green().bold());
    for path in &outcome.written {
        println!("  {}", path.display().to_string().white());
    }

    if result.is_clean() {
        println!();
        println!("{}", "No issues found - data looks clean!".green());
    }

    Ok(())
}
