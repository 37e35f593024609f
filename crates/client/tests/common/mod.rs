//! Common test utilities for integration tests.
//!
//! # Invariants
//! - All tests build clients through `test_client` so the Basic auth
//!   header is predictable (`test-id:test-key`).

use secrecy::SecretString;
use sumo_client::{Credentials, SumoClient};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header produced by the test credentials.
#[allow(dead_code)]
pub const TEST_BASIC_AUTH: &str = "Basic dGVzdC1pZDp0ZXN0LWtleQ==";

/// Build a client pointed at a mock server.
pub fn test_client(base_url: &str) -> SumoClient {
    SumoClient::builder()
        .base_url(base_url)
        .credentials(Credentials::new(
            "test-id",
            SecretString::new("test-key".to_string().into()),
        ))
        .build()
        .unwrap()
}

/// Default search parameters used by submission tests.
#[allow(dead_code)]
pub fn test_parameters() -> sumo_client::SearchParameters {
    sumo_client::SearchParameters {
        query: "error | count by _sourceHost".to_string(),
        from: "2024-05-17T11:00:00".to_string(),
        to: "2024-05-17T12:00:00".to_string(),
        time_zone: "UTC".to_string(),
        by_receipt_time: false,
        auto_parsing_mode: false,
    }
}
