//! Error types for the Sumo Logic client.
//!
//! Every variant here is fatal to the run: callers propagate them to the
//! process entry point, which logs one diagnostic and exits. There is no
//! retry anywhere in this crate.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during a search run.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A `from`/`to` value matched none of the accepted time forms.
    #[error("invalid time expression {0:?} (expected \"now\", an absolute timestamp, or -<n><m|h|d|w>)")]
    InvalidTimeExpression(String),

    /// Job creation or status endpoint returned an unexpected status code.
    #[error("search job request failed: {status} ({reason}): \"{message}\"")]
    Submission {
        status: u16,
        reason: String,
        message: String,
    },

    /// Records/messages endpoint returned an unexpected status code.
    #[error("result download failed: {status} ({reason}): \"{message}\"")]
    Pagination {
        status: u16,
        reason: String,
        message: String,
    },

    /// The polling deadline elapsed before the job finished gathering results.
    #[error("search job {id} did not complete within {timeout:?}")]
    Timeout { id: String, timeout: Duration },

    /// The job reached a terminal error state while polling.
    #[error("search job {id} ended in state {state:?}")]
    JobFailed { id: String, state: String },

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected envelope.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// The client builder was given an incomplete or invalid configuration.
    #[error("invalid client configuration: {0}")]
    Misconfigured(String),
}
