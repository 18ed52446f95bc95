//! Example: audit a contact export and print what would change.
//!
//! Usage:
//!   cargo run --example audit -- <file_path> [out_dir]

use std::env;
use std::path::PathBuf;

use contact_audit::{AnomalyKind, AuditConfig, ContactAudit};

fn main() -> contact_audit::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example audit -- <file_path> [out_dir]");
        std::process::exit(1);
    }

    let output_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir);

    let audit = ContactAudit::with_config(AuditConfig {
        input: PathBuf::from(&args[1]),
        output_dir,
        ..AuditConfig::default()
    });

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Contact audit: {}", args[1]);
    println!("{}", separator);

    match audit.analyze()? {
        None => println!("No data"),
        Some(outcome) => {
            let result = &outcome.classification;
            println!("Rows: {}", result.total_rows);
            for kind in AnomalyKind::ALL {
                println!("  {:24} {}", kind.label(), result.count(kind));
            }
            for group in result.duplicates.iter().take(5) {
                println!(
                    "  duplicate {} | {} on lines {:?}",
                    group.facility_id, group.contact_name, group.lines
                );
            }
        }
    }

    let outcome = audit.dry_run()?;
    println!();
    println!("Proposed changes:");
    for row in outcome.dry_run.changed().take(10) {
        println!("  line {}: {}", row.line, row.reasons);
        for change in &row.changes {
            println!(
                "    {} {:?} -> {:?}",
                change.column, change.original_value, change.new_value
            );
        }
    }

    println!();
    for path in &outcome.written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
