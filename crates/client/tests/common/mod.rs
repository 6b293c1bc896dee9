//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Mode client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here uses workspace `acme` and the credentials
//!   `api-token` / `api-password`
//!
//! # What this does NOT handle
//! - Mock setup for individual endpoints (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use mode_client::testing::load_fixture;
#[allow(unused_imports)]
pub use mode_client::{ClientError, ModeClient};
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` value for `api-token:api-password`.
#[allow(dead_code)]
pub const BASIC_AUTH: &str = "Basic YXBpLXRva2VuOmFwaS1wYXNzd29yZA==";

/// `Authorization` value derived from `batch/signature_token.json`.
#[allow(dead_code)]
pub const BATCH_BEARER: &str = "Bearer c2lndG9rMDAxOkFLRVkxMjM6QVNFQ1JFVDQ1Ng==";

/// Builder pointed at the mock server with test credentials.
#[allow(dead_code)]
pub fn builder_for(server: &MockServer) -> mode_client::ModeClientBuilder {
    ModeClient::builder()
        .host(server.uri())
        .workspace("acme")
        .credentials(
            "api-token",
            SecretString::new("api-password".to_string().into()),
        )
}

/// Client without a batch session, pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ModeClient {
    builder_for(server)
        .build()
        .expect("client should build against mock server")
}
