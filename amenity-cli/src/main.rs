//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use amenity_cli::CliError;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_logging();
    match amenity_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("amenity: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records to stderr, honouring `RUST_LOG` and defaulting to
/// warnings so reports on stdout stay clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
