//! HTTP send helper with expected-status checking.
//!
//! Responsibilities:
//! - Send a request and verify the response carries the one status code
//!   the endpoint documents.
//! - Extract the remote `message` field from error bodies so diagnostics
//!   carry the status code, reason phrase, and remote message.
//!
//! Does NOT handle:
//! - Retries. A single failure, transient or not, ends the run.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// A response that arrived but carried the wrong status code.
#[derive(Debug)]
pub(crate) struct HttpFailure {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

impl HttpFailure {
    pub fn into_submission(self) -> ClientError {
        ClientError::Submission {
            status: self.status,
            reason: self.reason,
            message: self.message,
        }
    }

    pub fn into_pagination(self) -> ClientError {
        ClientError::Pagination {
            status: self.status,
            reason: self.reason,
            message: self.message,
        }
    }
}

/// Error bodies are expected to carry a `message` field.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Send a request and return the response if its status equals `expected`.
///
/// Any other status is turned into an [`HttpFailure`] and mapped through
/// `on_failure` so call sites choose the error taxonomy (submission vs
/// pagination).
pub(crate) async fn send_expecting<F>(
    builder: RequestBuilder,
    expected: StatusCode,
    on_failure: F,
) -> Result<Response>
where
    F: FnOnce(HttpFailure) -> ClientError,
{
    let response = builder.send().await?;
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let reason = status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string();
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    };

    Err(on_failure(HttpFailure {
        status: status.as_u16(),
        reason,
        message,
    }))
}
