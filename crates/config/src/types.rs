//! Configuration types for a search run.
//!
//! Responsibilities:
//! - Define the structures deserialized from the YAML configuration file.
//! - Define the enums for the search kind and output type so unsupported
//!   values fail at parse time, before any network activity.
//!
//! Does NOT handle:
//! - Loading and validation (see `loader`).
//! - Network calls or rendering (see the client and cli crates).
//!
//! Invariants:
//! - Field names mirror the configuration document; wire-style camelCase
//!   keys are mapped with serde renames.
//! - The access key is held as a `SecretString` and never printed.

use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration document.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(rename = "sumologic_environment")]
    pub environment: EnvironmentConfig,
    #[serde(rename = "sumologic_search")]
    pub search: SearchConfig,
    pub processing: ProcessingConfig,
}

/// API endpoint and credentials.
#[derive(Debug, Deserialize)]
pub struct EnvironmentConfig {
    /// Base URL of the Sumo Logic API (e.g. https://api.eu.sumologic.com/api)
    pub api_base_url: String,
    pub api_access_id: String,
    pub api_access_key: SecretString,
}

/// The search to run: query, time range, and search-job flags.
#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    pub query: String,
    /// Range start: "now", an absolute timestamp, or a relative offset like "-1h".
    pub from: String,
    /// Range end, same forms as `from`.
    pub to: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    #[serde(rename = "byReceiptTime", default)]
    pub by_receipt_time: bool,
    #[serde(rename = "autoParsingMode", default)]
    pub auto_parsing_mode: bool,
    /// Which result rows to download: aggregated records or raw messages.
    #[serde(rename = "type")]
    pub kind: SearchKind,
}

/// Processing options: polling, pagination, and output selection.
#[derive(Debug, Deserialize)]
pub struct ProcessingConfig {
    /// Verbose progress logging when true.
    #[serde(default)]
    pub debug: bool,
    /// Polling deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout: u64,
    /// Pagination batch size (rows per request).
    #[serde(default = "default_batch")]
    pub batch: usize,
    pub output_type: OutputType,
    /// Maximum rendered cell width for screen output.
    #[serde(default = "default_cell_width")]
    pub screen_max_cell_width: usize,
    /// Destination path for CSV output.
    #[serde(default)]
    pub output_destination: Option<PathBuf>,
}

/// Result kind downloaded for the whole run. Fixed at startup, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Records,
    Messages,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Messages => "messages",
        }
    }
}

/// Where results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Screen,
    Csv,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Csv => "csv",
        }
    }
}

pub(crate) fn default_timeout_secs() -> u64 {
    300
}

pub(crate) fn default_batch() -> usize {
    1000
}

pub(crate) fn default_cell_width() -> usize {
    30
}
