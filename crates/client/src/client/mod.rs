//! The Sumo Logic API client.
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - `search`: the search-job lifecycle methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Every request carries HTTP Basic auth built from the access id/key.
//! - The base URL never ends with a trailing slash.

pub mod builder;
mod search;

pub use builder::SumoClientBuilder;

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// HTTP Basic credentials for the API: access id and access key.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_id: String,
    access_key: SecretString,
}

impl Credentials {
    pub fn new(access_id: impl Into<String>, access_key: SecretString) -> Self {
        Self {
            access_id: access_id.into(),
            access_key,
        }
    }

    /// Attach Basic auth to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.access_id, Some(self.access_key.expose_secret()))
    }
}

/// Sumo Logic Search Job API client.
///
/// Create one with [`SumoClient::builder()`]:
///
/// ```rust,no_run
/// use secrecy::SecretString;
/// use sumo_client::{Credentials, SumoClient};
///
/// # fn example() -> sumo_client::Result<()> {
/// let client = SumoClient::builder()
///     .base_url("https://api.sumologic.com/api")
///     .credentials(Credentials::new(
///         "suXYZ",
///         SecretString::new("key".to_string().into()),
///     ))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SumoClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl SumoClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SumoClientBuilder {
        builder::SumoClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
