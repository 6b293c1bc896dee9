//! Query client. Queries are addressed through their owning report.

use std::sync::Arc;

use serde_json::json;

use crate::endpoints::{ApiRequest, Requester, encode_path_segment};
use crate::error::Result;
use crate::models::{NewQuery, Query, QueryFields};

#[derive(Debug, Clone)]
pub struct QueryClient {
    requester: Arc<dyn Requester>,
}

impl QueryClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    fn collection_path(report: &str) -> String {
        format!("/reports/{}/queries", encode_path_segment(report))
    }

    fn item_path(report: &str, query: &str) -> String {
        format!(
            "{}/{}",
            Self::collection_path(report),
            encode_path_segment(query)
        )
    }

    pub async fn get(&self, report: &str, query: &str) -> Result<Query> {
        self.requester
            .request(ApiRequest::get(Self::item_path(report, query)))
            .await?
            .decode("query")
    }

    /// All queries of a report, in server order.
    pub async fn list(&self, report: &str) -> Result<Vec<Query>> {
        self.requester
            .request(ApiRequest::get(Self::collection_path(report)))
            .await?
            .embedded("queries", "query")
    }

    pub async fn create(&self, report: &str, query: &NewQuery<'_>) -> Result<Query> {
        self.requester
            .request(ApiRequest::post(Self::collection_path(report)).json(json!({ "query": query })))
            .await?
            .decode("query")
    }

    /// Change the given fields of a query; unset fields keep their server value.
    pub async fn update(&self, report: &str, query: &str, fields: &QueryFields<'_>) -> Result<Query> {
        self.requester
            .request(ApiRequest::patch(Self::item_path(report, query)).json(json!({ "query": fields })))
            .await?
            .decode("query")
    }

    pub async fn delete(&self, report: &str, query: &str) -> Result<()> {
        self.requester
            .request(ApiRequest::delete(Self::item_path(report, query)))
            .await?;
        Ok(())
    }
}
