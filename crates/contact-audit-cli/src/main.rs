//! contact-audit CLI - audit a contact export and preview corrections.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = commands::audit_config(&cli.paths);

    let result = match cli.command {
        Some(Commands::Analyze) => commands::analyze::run(config, cli.verbose),

        Some(Commands::Dryrun { show_changes }) => {
            commands::dryrun::run(config, show_changes, cli.verbose)
        }

        None => commands::analyze::run(config.clone(), cli.verbose)
            .and_then(|_| commands::dryrun::run(config, false, cli.verbose)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
