//! Batch query client: account-wide query listing over the batch surface.
//!
//! Requests go to `{host}/batch/{workspace}` with the bearer credential of an open
//! [`BatchSession`](crate::auth::BatchSession). Page bounds are checked before sending.

use std::sync::Arc;

use futures::stream::{self, Stream, TryStreamExt};
use mode_config::constants::BATCH_MAX_PER_PAGE;

use crate::endpoints::{ApiRequest, QueryParams, Requester, Surface};
use crate::error::{ClientError, Result};
use crate::models::{BatchQuery, BatchQueryPage, IncludeSpaces};

#[derive(Debug, Clone)]
pub struct BatchQueryClient {
    requester: Arc<dyn Requester>,
}

impl BatchQueryClient {
    /// `requester` must attach the batch bearer credential.
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    /// One page of queries across the account.
    ///
    /// `page` starts at 1; `per_page` must be within `1..=1000`.
    /// `include_spaces` is only sent when set.
    pub async fn list(
        &self,
        page: u32,
        per_page: u32,
        include_spaces: Option<IncludeSpaces>,
    ) -> Result<BatchQueryPage> {
        validate_page(page, per_page)?;
        let params = QueryParams::new()
            .count("page", page)
            .count("per_page", per_page)
            .text("include_spaces", include_spaces.as_ref().map(IncludeSpaces::as_str));
        self.requester
            .request(ApiRequest::get("/queries").on(Surface::Batch).params(params))
            .await?
            .decode("batch query")
    }

    /// Every query across the account, fetching pages lazily until the last one.
    pub fn stream_all(
        &self,
        per_page: u32,
        include_spaces: Option<IncludeSpaces>,
    ) -> impl Stream<Item = Result<BatchQuery>> + Send + '_ {
        stream::try_unfold(Some(1u32), move |next| async move {
            let Some(page) = next else {
                return Ok::<_, ClientError>(None);
            };
            let result = self.list(page, per_page, include_spaces).await?;
            let more = result.pagination.has_next_page() && !result.queries.is_empty();
            let next = more.then(|| page + 1);
            Ok(Some((
                stream::iter(result.queries.into_iter().map(Ok::<_, ClientError>)),
                next,
            )))
        })
        .try_flatten()
    }
}

fn validate_page(page: u32, per_page: u32) -> Result<()> {
    if page == 0 {
        return Err(ClientError::InvalidArgument(
            "page numbers start at 1".to_string(),
        ));
    }
    if per_page == 0 || per_page > BATCH_MAX_PER_PAGE {
        return Err(ClientError::InvalidArgument(format!(
            "per_page must be between 1 and {BATCH_MAX_PER_PAGE}, got {per_page}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRequester;
    use serde_json::json;

    fn page_body(page: u64, total_pages: u64, tokens: &[&str]) -> serde_json::Value {
        let queries: Vec<_> = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"id": i, "token": t, "name": format!("query {t}")}))
            .collect();
        json!({
            "pagination": {
                "page": page,
                "per_page": 2,
                "count": tokens.len(),
                "total_pages": total_pages,
                "total_count": 3
            },
            "queries": queries
        })
    }

    #[tokio::test]
    async fn test_list_rejects_out_of_range_pages_locally() {
        let requester = Arc::new(RecordingRequester::new());
        let client = BatchQueryClient::new(requester.clone());

        for (page, per_page) in [(0, 10), (1, 0), (1, 1001)] {
            let err = client
                .list(page, per_page, None)
                .await
                .unwrap_err();
            assert!(matches!(err, ClientError::InvalidArgument(_)));
        }
        assert!(requester.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_sends_batch_request_with_params() {
        let requester = Arc::new(RecordingRequester::new());
        requester.push_json(page_body(1, 1, &["a"]));
        let client = BatchQueryClient::new(requester.clone());

        let page = client.list(1, 1000, Some(IncludeSpaces::All)).await.unwrap();
        assert_eq!(page.queries[0].token, "a");

        let request = requester.last_request();
        assert_eq!(request.surface, Surface::Batch);
        assert_eq!(request.path, "/queries");
        assert_eq!(request.params.get("page"), Some("1"));
        assert_eq!(request.params.get("per_page"), Some("1000"));
        assert_eq!(request.params.get("include_spaces"), Some("all"));
    }

    #[tokio::test]
    async fn test_list_leaves_include_spaces_out_when_unset() {
        let requester = Arc::new(RecordingRequester::new());
        requester.push_json(page_body(1, 1, &["a"]));
        let client = BatchQueryClient::new(requester.clone());

        client.list(1, 1000, None).await.unwrap();

        let request = requester.last_request();
        assert_eq!(request.params.get("include_spaces"), None);
        assert_eq!(request.params.len(), 2);
    }

    #[tokio::test]
    async fn test_stream_all_walks_every_page() {
        let requester = Arc::new(RecordingRequester::new());
        requester.push_json(page_body(1, 2, &["a", "b"]));
        requester.push_json(page_body(2, 2, &["c"]));
        let client = BatchQueryClient::new(requester.clone());

        let all: Vec<BatchQuery> = client
            .stream_all(2, None)
            .try_collect()
            .await
            .unwrap();

        let tokens: Vec<_> = all.iter().map(|q| q.token.as_str()).collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
        let pages: Vec<_> = requester
            .requests()
            .iter()
            .map(|r| r.params.get("page").unwrap_or_default().to_string())
            .collect();
        assert_eq!(pages, vec!["1", "2"]);
    }
}
