//! Configuration management for the Sumo Logic search CLI.
//!
//! This crate provides types and a loader for the YAML configuration
//! document that drives a search run (environment, search parameters,
//! processing options).

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::load_config;
pub use types::{
    Config, EnvironmentConfig, OutputType, ProcessingConfig, SearchConfig, SearchKind,
};
