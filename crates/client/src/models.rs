//! Wire models for the Search Job API.
//!
//! Responsibilities:
//! - Define request/response structures for job creation, status polling,
//!   and result pagination.
//!
//! Does NOT handle:
//! - HTTP calls (see [`crate::endpoints`]).
//! - Rendering of rows (exporters live in the CLI crate).
//!
//! Invariants:
//! - `SearchParameters` is immutable once built from configuration.
//! - `JobStatus.state` keeps the raw wire string; the sentinel values
//!   contain spaces, and only done/cancelled are ever distinguished.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for one search run, resolved from configuration at startup.
///
/// Serializes directly into the job creation body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub query: String,
    /// Resolved absolute range start in wire format.
    pub from: String,
    /// Resolved absolute range end in wire format.
    pub to: String,
    pub time_zone: String,
    pub by_receipt_time: bool,
    pub auto_parsing_mode: bool,
}

/// Opaque identifier of a search job, owned by the client for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful job creation response.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateJobResponse {
    pub id: String,
}

/// Current state of a search job as reported by the status endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub state: String,
    #[serde(default)]
    pub record_count: usize,
    #[serde(default)]
    pub message_count: usize,
}

impl JobStatus {
    /// Completion sentinel: the job has gathered all results.
    pub const DONE: &'static str = "DONE GATHERING RESULTS";
    /// Terminal error state.
    pub const CANCELLED: &'static str = "CANCELLED";

    pub fn is_done(&self) -> bool {
        self.state == Self::DONE
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == Self::CANCELLED
    }

    /// The authoritative row total for pagination of the given kind.
    pub fn total_for(&self, kind: ResultKind) -> usize {
        match kind {
            ResultKind::Records => self.record_count,
            ResultKind::Messages => self.message_count,
        }
    }
}

/// Which result rows a run downloads. Fixed at startup, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Aggregated result rows.
    Records,
    /// Raw matched log lines.
    Messages,
}

impl ResultKind {
    /// URL path segment of the endpoint serving this kind.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Messages => "messages",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// One result row: a mapping from field name to value.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRow {
    #[serde(default)]
    pub map: serde_json::Map<String, serde_json::Value>,
}

impl ResultRow {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.map.get(field)
    }
}

/// A field in the result schema; the order of the `fields` array defines
/// column order for rendering.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "fieldType", default)]
    pub field_type: Option<String>,
    #[serde(rename = "keyField", default)]
    pub key_field: bool,
}

/// One page of results together with the schema from the response envelope.
#[derive(Debug, Clone)]
pub struct ResultPage {
    pub fields: Vec<FieldDescriptor>,
    pub rows: Vec<ResultRow>,
}

/// Envelope of the records endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsEnvelope {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub records: Vec<ResultRow>,
}

/// Envelope of the messages endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct MessagesEnvelope {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub messages: Vec<ResultRow>,
}
