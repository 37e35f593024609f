//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading and validation failures.
//!
//! Does NOT handle:
//! - Errors from the search run itself (see the client crate).
//!
//! Invariants:
//! - All variants include enough context (paths, offending values) to fix
//!   the configuration file without reading source code.
//! - Error text never includes the access key.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid api_base_url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{output:?} output is not supported for the {kind:?} search type")]
    UnsupportedCombination { kind: String, output: String },

    #[error("output_destination is required when output_type is \"csv\"")]
    MissingOutputDestination,

    #[error("invalid {field}: {message}")]
    InvalidValue { field: String, message: String },
}
