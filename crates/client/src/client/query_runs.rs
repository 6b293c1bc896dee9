//! Query run client.

use std::sync::Arc;

use crate::endpoints::{ApiRequest, Requester, encode_path_segment};
use crate::error::Result;
use crate::models::QueryRun;

/// Reads the per-query results of a report run.
#[derive(Debug, Clone)]
pub struct QueryRunClient {
    requester: Arc<dyn Requester>,
}

impl QueryRunClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    fn collection_path(report: &str, run: &str) -> String {
        format!(
            "/reports/{}/runs/{}/query_runs",
            encode_path_segment(report),
            encode_path_segment(run)
        )
    }

    pub async fn get(&self, report: &str, run: &str, query_run: &str) -> Result<QueryRun> {
        let path = format!(
            "{}/{}",
            Self::collection_path(report, run),
            encode_path_segment(query_run)
        );
        self.requester
            .request(ApiRequest::get(path))
            .await?
            .decode("query run")
    }

    pub async fn list(&self, report: &str, run: &str) -> Result<Vec<QueryRun>> {
        self.requester
            .request(ApiRequest::get(Self::collection_path(report, run)))
            .await?
            .embedded("query_runs", "query run")
    }
}
