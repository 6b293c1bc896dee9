//! Report client.
//!
//! Responsibilities:
//! - Report reads, listings by space or by data source, and field updates.
//! - Lifecycle calls: archive, unarchive, GitHub sync, delete.
//! - Workspace-wide purge of old report runs, guarded locally.
//!
//! Invariants:
//! - `purge` only ever sends dates strictly older than the retention window
//!   (`PURGE_MIN_AGE_DAYS` days before today); anything newer fails before a request.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use mode_config::constants::PURGE_MIN_AGE_DAYS;
use serde_json::{Map, Value, json};

use crate::endpoints::{ApiRequest, QueryParams, Requester, encode_path_segment};
use crate::error::{ClientError, Result};
use crate::models::{ListOptions, Report, ReportFields};

#[derive(Debug, Clone)]
pub struct ReportClient {
    requester: Arc<dyn Requester>,
}

impl ReportClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    fn item_path(report: &str) -> String {
        format!("/reports/{}", encode_path_segment(report))
    }

    pub async fn get(&self, report: &str) -> Result<Report> {
        self.requester
            .request(ApiRequest::get(Self::item_path(report)))
            .await?
            .decode("report")
    }

    /// Reports in a space.
    pub async fn list_for_space(&self, space: &str, options: &ListOptions) -> Result<Vec<Report>> {
        let path = format!("/spaces/{}/reports", encode_path_segment(space));
        self.list(path, options).await
    }

    /// Reports whose queries use a data source.
    pub async fn list_using_data_source(
        &self,
        data_source: &str,
        options: &ListOptions,
    ) -> Result<Vec<Report>> {
        let path = format!("/data_sources/{}/reports", encode_path_segment(data_source));
        self.list(path, options).await
    }

    async fn list(&self, path: String, options: &ListOptions) -> Result<Vec<Report>> {
        let params = QueryParams::new()
            .text("filter", options.filter.as_deref())
            .required("order", options.order)
            .required("order_by", options.order_by);
        self.requester
            .request(ApiRequest::get(path).params(params))
            .await?
            .embedded("reports", "report")
    }

    /// Change the given fields of a report; unset fields keep their server value.
    pub async fn update(&self, report: &str, fields: &ReportFields<'_>) -> Result<Report> {
        self.requester
            .request(ApiRequest::patch(Self::item_path(report)).json(json!({ "report": fields })))
            .await?
            .decode("report")
    }

    pub async fn delete(&self, report: &str) -> Result<()> {
        self.requester
            .request(ApiRequest::delete(Self::item_path(report)))
            .await?;
        Ok(())
    }

    pub async fn archive(&self, report: &str) -> Result<Report> {
        self.lifecycle(report, "archive").await
    }

    pub async fn unarchive(&self, report: &str) -> Result<Report> {
        self.lifecycle(report, "unarchive").await
    }

    async fn lifecycle(&self, report: &str, action: &str) -> Result<Report> {
        let path = format!("{}/{action}", Self::item_path(report));
        self.requester
            .request(ApiRequest::patch(path))
            .await?
            .decode("report")
    }

    /// Push the report to its linked GitHub repository.
    pub async fn sync(&self, report: &str, commit_message: Option<&str>) -> Result<Report> {
        let path = format!("{}/sync_to_github", Self::item_path(report));
        self.requester
            .request(ApiRequest::patch(path).json(commit_body(commit_message)))
            .await?
            .decode("report")
    }

    /// Purge report runs created before `before`.
    ///
    /// `before` must be strictly earlier than today minus the retention window.
    /// "Today" is the local calendar date of the calling machine, not UTC, so near
    /// midnight the cutoff follows the caller's clock rather than the server's.
    pub async fn purge(&self, before: NaiveDate) -> Result<Value> {
        self.purge_relative_to(before, Local::now().date_naive())
            .await
    }

    pub(crate) async fn purge_relative_to(&self, before: NaiveDate, today: NaiveDate) -> Result<Value> {
        let cutoff = purge_cutoff(today)?;
        if before >= cutoff {
            return Err(ClientError::InvalidArgument(format!(
                "purge date {before} must be earlier than {cutoff} ({PURGE_MIN_AGE_DAYS} days before {today})"
            )));
        }

        let body = json!({ "time": before.format("%Y-%m-%d").to_string() });
        let response = self
            .requester
            .request(ApiRequest::post("/reports/purge").json(body))
            .await?;
        Ok(response.into_value())
    }
}

fn purge_cutoff(today: NaiveDate) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(PURGE_MIN_AGE_DAYS))
        .ok_or_else(|| ClientError::InvalidArgument(format!("no purge cutoff exists for {today}")))
}

/// `{"commit_message": ...}`, or `{}` when no message is given.
pub(crate) fn commit_body(commit_message: Option<&str>) -> Value {
    let mut body = Map::new();
    if let Some(message) = commit_message.filter(|m| !m.is_empty()) {
        body.insert("commit_message".to_string(), Value::String(message.to_string()));
    }
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRequester;

    fn client() -> (Arc<RecordingRequester>, ReportClient) {
        let requester = Arc::new(RecordingRequester::new());
        (requester.clone(), ReportClient::new(requester))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_purge_rejects_recent_date_without_request() {
        let (requester, reports) = client();
        let today = date(2024, 6, 30);

        let err = reports
            .purge_relative_to(date(2024, 6, 20), today)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(requester.requests().is_empty());
    }

    #[tokio::test]
    async fn test_purge_rejects_exact_cutoff() {
        let (requester, reports) = client();
        let err = reports
            .purge_relative_to(date(2024, 6, 15), date(2024, 6, 30))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(requester.requests().is_empty());
    }

    #[tokio::test]
    async fn test_purge_sends_old_date() {
        let (requester, reports) = client();

        reports
            .purge_relative_to(date(2024, 6, 10), date(2024, 6, 30))
            .await
            .unwrap();

        let request = requester.last_request();
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.path, "/reports/purge");
        assert_eq!(request.json, Some(json!({"time": "2024-06-10"})));
    }

    #[tokio::test]
    async fn test_purge_uses_local_today() {
        let (requester, reports) = client();
        let today = Local::now().date_naive();

        let recent = today - Days::new(10);
        assert!(reports.purge(recent).await.is_err());
        assert!(requester.requests().is_empty());

        let old = today - Days::new(20);
        reports.purge(old).await.unwrap();
        assert_eq!(
            requester.last_request().json,
            Some(json!({"time": old.format("%Y-%m-%d").to_string()}))
        );
    }

    #[test]
    fn test_commit_body_omits_missing_message() {
        assert_eq!(commit_body(None), json!({}));
        assert_eq!(commit_body(Some("")), json!({}));
        assert_eq!(commit_body(Some("ship it")), json!({"commit_message": "ship it"}));
    }
}
