//! Command-line arguments.
//!
//! The binary is single-purpose: one required flag pointing at the YAML
//! configuration file that fully describes the search run.

use clap::Parser;
use std::path::PathBuf;

/// Run a query against the Sumo Logic Search Job API and export the results.
#[derive(Parser, Debug)]
#[command(name = "sumo-search", version, about)]
pub struct Cli {
    /// Path to the configuration file describing the search run.
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_flag_is_required() {
        assert!(Cli::try_parse_from(["sumo-search"]).is_err());
    }

    #[test]
    fn short_and_long_forms_parse() {
        let cli = Cli::try_parse_from(["sumo-search", "-c", "run.yaml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("run.yaml"));

        let cli = Cli::try_parse_from(["sumo-search", "--config", "/etc/sumo/run.yaml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/sumo/run.yaml"));
    }
}
