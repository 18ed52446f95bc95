use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber so stdout stays free for the command output.
///
/// `RUST_LOG` wins when set; otherwise the library and the CLI log at
/// `info`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "contact_audit=debug,contact_audit_cli=debug"
    } else {
        "contact_audit=info,contact_audit_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
