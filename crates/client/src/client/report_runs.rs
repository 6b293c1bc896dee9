//! Report run client.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use crate::endpoints::{
    ApiRequest, QueryParams, Requester, decode_value, encode_path_segment, take_pointer,
};
use crate::error::Result;
use crate::models::{ListOptions, ReportRun, ReportRunPage};

#[derive(Debug, Clone)]
pub struct ReportRunClient {
    requester: Arc<dyn Requester>,
}

impl ReportRunClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    fn collection_path(report: &str) -> String {
        format!("/reports/{}/runs", encode_path_segment(report))
    }

    fn item_path(report: &str, run: &str) -> String {
        format!(
            "{}/{}",
            Self::collection_path(report),
            encode_path_segment(run)
        )
    }

    pub async fn get(&self, report: &str, run: &str) -> Result<ReportRun> {
        self.requester
            .request(ApiRequest::get(Self::item_path(report, run)))
            .await?
            .decode("report run")
    }

    /// One page of runs with its pagination block.
    pub async fn list(&self, report: &str, options: &ListOptions) -> Result<ReportRunPage> {
        let params = QueryParams::new()
            .text("filter", options.filter.as_deref())
            .required("order", options.order)
            .required("order_by", options.order_by);
        let mut body = self
            .requester
            .request(ApiRequest::get(Self::collection_path(report)).params(params))
            .await?
            .into_json("report run")?;

        let pagination = decode_value(
            take_pointer(&mut body, "/pagination"),
            "report run",
            "pagination",
        )?;
        let report_runs = decode_value(
            take_pointer(&mut body, "/_embedded/report_runs"),
            "report run",
            "_embedded.report_runs",
        )?;
        Ok(ReportRunPage {
            pagination,
            report_runs,
        })
    }

    /// Start a run with the given parameter values.
    pub async fn create(&self, report: &str, parameters: &Map<String, Value>) -> Result<ReportRun> {
        self.requester
            .request(
                ApiRequest::post(Self::collection_path(report))
                    .json(json!({ "parameters": parameters })),
            )
            .await?
            .decode("report run")
    }

    /// Start a new run reusing the parameters of an existing one.
    pub async fn clone_run(&self, report: &str, run: &str) -> Result<ReportRun> {
        let path = format!("{}/clone", Self::item_path(report, run));
        self.requester
            .request(ApiRequest::post(path))
            .await?
            .decode("report run")
    }
}
