//! Definition (reusable SQL snippet) models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Links, Timestamp};
use crate::serde_helpers::{opt_u64_from_string_or_number, u64_from_string_or_number};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub token: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub source: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub data_source_id: Option<u64>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub last_saved_at: Option<Timestamp>,
    pub last_successful_sync_at: Option<Timestamp>,
    pub github_link: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Fields of a definition creation or change. Unset fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DefinitionFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<u64>,
}

impl DefinitionFields<'_> {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
