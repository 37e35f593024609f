//! sumo-search - run a query against the Sumo Logic Search Job API.
//!
//! Responsibilities:
//! - Parse command-line arguments and load the configuration file.
//! - Initialize logging from the configuration's debug flag.
//! - Run the search pipeline and translate its outcome into an exit code.
//!
//! Does NOT handle:
//! - The search-job lifecycle itself (see `crates/client`).
//!
//! Invariants:
//! - Configuration is validated before logging is initialized and before
//!   any network activity.
//! - Every fatal condition is reported as a single timestamped line on
//!   stderr, and `std::process::exit` is called exactly once.

mod args;
mod error;
mod exporters;
mod pipeline;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match sumo_config::load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(ExitCode::ConfigurationError.as_i32());
        }
    };

    init_tracing(config.processing.debug);

    let exit_code = match pipeline::run(config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::error!("{e:#}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initialize logging on stderr.
///
/// The config `debug` flag selects the default level (progress logging vs
/// fatal-only); `RUST_LOG` overrides it when set.
fn init_tracing(debug: bool) {
    let default_level = if debug { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
