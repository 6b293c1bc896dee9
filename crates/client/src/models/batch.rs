//! Batch API models: account-wide query listings and signature tokens.

use serde::{Deserialize, Serialize};

use crate::models::common::{Pagination, Timestamp};
use crate::serde_helpers::{opt_u64_from_string_or_number, u64_from_string_or_number};

/// A query as listed by the batch surface, with its owning report and space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQuery {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub token: String,
    pub name: Option<String>,
    pub raw_query: Option<String>,
    pub creator_email: Option<String>,
    pub data_source_token: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub data_source_id: Option<u64>,
    pub report_token: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub report_id: Option<u64>,
    pub space_token: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub space_id: Option<u64>,
}

/// One page of batch queries. Unlike the `/api` lists, items are top-level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQueryPage {
    pub pagination: Pagination,
    pub queries: Vec<BatchQuery>,
}

/// Widens the batch query listing beyond the server's default space selection.
///
/// Leaving it unset (`None` at the call site) lets the server pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeSpaces {
    All,
}

impl IncludeSpaces {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
        }
    }
}

/// Scope requested for a signature token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthScope {
    pub authentication_for: String,
    pub authorization_type: String,
}

impl AuthScope {
    /// Read-only access to the batch API.
    pub fn batch_read_only() -> Self {
        Self {
            authentication_for: "batch-api".to_string(),
            authorization_type: "read-only".to_string(),
        }
    }
}

/// Body of a signature token request.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureTokenRequest {
    pub name: String,
    pub expires_at: String,
    pub auth_scope: AuthScope,
}

/// An issued signature token. `access_secret` is only present on creation.
#[derive(Clone, Deserialize)]
pub struct SignatureToken {
    pub token: String,
    pub access_key: String,
    pub access_secret: String,
    pub name: Option<String>,
    pub expires_at: Option<Timestamp>,
}

impl std::fmt::Debug for SignatureToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureToken")
            .field("token", &self.token)
            .field("access_key", &self.access_key)
            .field("access_secret", &"<redacted>")
            .field("name", &self.name)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
