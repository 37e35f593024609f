//! Configuration loading and validation.
//!
//! Responsibilities:
//! - Read and parse the YAML configuration file.
//! - Validate the parameter set before any network activity: base URL,
//!   pagination batch size, polling deadline, cell width, and the
//!   kind/output combination.
//!
//! Does NOT handle:
//! - Time expression resolution (see the client crate).
//! - Applying the debug flag to logging (done at the process entry point).
//!
//! Invariants:
//! - A `Config` returned from `load_config` is valid for a full run;
//!   later stages never re-validate it.
//! - `messages` + `csv` is rejected here, not at export time.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::{Config, OutputType, SearchKind};

/// Load and validate the configuration document at `path`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    url::Url::parse(&config.environment.api_base_url).map_err(|source| {
        ConfigError::InvalidBaseUrl {
            url: config.environment.api_base_url.clone(),
            source,
        }
    })?;

    if config.processing.batch == 0 {
        return Err(ConfigError::InvalidValue {
            field: "processing.batch".to_string(),
            message: "batch size must be at least 1".to_string(),
        });
    }

    if config.processing.timeout == 0 {
        return Err(ConfigError::InvalidValue {
            field: "processing.timeout".to_string(),
            message: "polling timeout must be at least 1 second".to_string(),
        });
    }

    // A truncated cell needs room for one character plus the "..." marker.
    if config.processing.screen_max_cell_width < 4 {
        return Err(ConfigError::InvalidValue {
            field: "processing.screen_max_cell_width".to_string(),
            message: "cell width must be at least 4".to_string(),
        });
    }

    match (config.search.kind, config.processing.output_type) {
        (SearchKind::Messages, OutputType::Csv) => Err(ConfigError::UnsupportedCombination {
            kind: config.search.kind.as_str().to_string(),
            output: config.processing.output_type.as_str().to_string(),
        }),
        (_, OutputType::Csv) if config.processing.output_destination.is_none() => {
            Err(ConfigError::MissingOutputDestination)
        }
        _ => Ok(()),
    }
}
