//! Builder for [`SumoClient`].
//!
//! Responsibilities:
//! - Collect and validate connection settings (base URL, credentials,
//!   request timeout).
//! - Configure the underlying `reqwest::Client` (JSON Accept header).
//!
//! Invariants:
//! - `build()` fails rather than producing a client missing its base URL
//!   or credentials.
//! - Trailing slashes are stripped from the base URL so endpoint paths
//!   can be joined with a plain `/`.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::{Credentials, SumoClient};
use crate::error::{ClientError, Result};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`SumoClient`].
#[derive(Debug, Default)]
pub struct SumoClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl SumoClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL (e.g. `https://api.sumologic.com/api`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the Basic auth credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SumoClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Misconfigured("base URL is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Misconfigured(
                "base URL must not be empty".to_string(),
            ));
        }

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::Misconfigured("credentials are required".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()?;

        Ok(SumoClient {
            http,
            base_url,
            credentials,
        })
    }
}
