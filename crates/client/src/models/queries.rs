//! Query models. Queries always belong to a report.

use serde::{Deserialize, Serialize};

use crate::models::common::{Links, Timestamp};
use crate::serde_helpers::{
    opt_string_from_scalar, opt_u64_from_string_or_number, u64_from_string_or_number,
};

/// A SQL query attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub token: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: Option<String>,
    pub raw_query: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub data_source_id: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub last_run_id: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub explorations_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub report_imports_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_string_from_scalar")]
    pub mapping_id: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Body of a query creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuery<'a> {
    pub raw_query: &'a str,
    pub data_source_id: u64,
    pub name: &'a str,
}

/// Fields of a query change. Unset fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}
