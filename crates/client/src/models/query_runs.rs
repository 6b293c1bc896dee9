//! Query run models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{Links, Timestamp};
use crate::serde_helpers::{
    opt_string_from_scalar, opt_u64_from_string_or_number, u64_from_string_or_number,
};

/// Server state of a single query execution within a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryRunState {
    Pending,
    Enqueued,
    Running,
    Succeeded,
    Completed,
    Failed,
    Cancelled,
    /// A value this client does not know about yet.
    #[serde(other)]
    Unknown,
}

/// One execution of one query as part of a report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRun {
    pub token: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub state: Option<QueryRunState>,
    pub raw_source: Option<String>,
    pub rendered_source: Option<String>,
    pub statement_annotation: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub data_source_id: Option<u64>,
    #[serde(default, deserialize_with = "opt_string_from_scalar")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub max_result_bytes: Option<u64>,
    pub query_token: Option<String>,
    pub query_name: Option<String>,
    pub query_created_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, deserialize_with = "opt_string_from_scalar")]
    pub error_code: Option<String>,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
    pub help_url: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl QueryRun {
    pub fn is_failed(&self) -> bool {
        self.state == Some(QueryRunState::Failed) || self.error_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_query_run_state_is_tolerated() {
        let run: QueryRun = serde_json::from_value(json!({
            "token": "qr1",
            "id": 3,
            "state": "warming_up",
            "limit": true,
            "error_code": 500
        }))
        .unwrap();
        assert_eq!(run.state, Some(QueryRunState::Unknown));
        assert_eq!(run.limit.as_deref(), Some("true"));
        assert_eq!(run.error_code.as_deref(), Some("500"));
    }

    #[test]
    fn test_failed_query_run() {
        let run: QueryRun = serde_json::from_value(json!({
            "token": "qr1",
            "id": "3",
            "state": "failed",
            "error_message": "relation does not exist"
        }))
        .unwrap();
        assert!(run.is_failed());
    }
}
