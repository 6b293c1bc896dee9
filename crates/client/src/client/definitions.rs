//! Definition client.

use std::sync::Arc;

use serde_json::json;

use crate::client::reports::commit_body;
use crate::endpoints::{ApiRequest, QueryParams, Requester, encode_path_segment};
use crate::error::{ClientError, Result};
use crate::models::{Definition, DefinitionFields};

#[derive(Debug, Clone)]
pub struct DefinitionClient {
    requester: Arc<dyn Requester>,
}

impl DefinitionClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    fn item_path(token: &str) -> String {
        format!("/definitions/{}", encode_path_segment(token))
    }

    pub async fn get(&self, token: &str) -> Result<Definition> {
        self.requester
            .request(ApiRequest::get(Self::item_path(token)))
            .await?
            .decode("definition")
    }

    /// Definitions, optionally narrowed by a filter expression and/or a token list.
    pub async fn list<S: AsRef<str>>(
        &self,
        filter: Option<&str>,
        tokens: &[S],
    ) -> Result<Vec<Definition>> {
        let params = QueryParams::new()
            .text("filter", filter)
            .list("tokens", tokens);
        self.requester
            .request(ApiRequest::get("/definitions").params(params))
            .await?
            .embedded("definitions", "definition")
    }

    pub async fn create(&self, fields: &DefinitionFields<'_>) -> Result<Definition> {
        if fields.name.is_none() || fields.source.is_none() {
            return Err(ClientError::InvalidArgument(
                "a new definition needs a name and a source".to_string(),
            ));
        }
        self.requester
            .request(ApiRequest::post("/definitions").json(json!({ "definition": fields })))
            .await?
            .decode("definition")
    }

    /// Change the given fields of a definition. Mode takes definition updates as POST.
    pub async fn update(&self, token: &str, fields: &DefinitionFields<'_>) -> Result<Definition> {
        self.requester
            .request(
                ApiRequest::post(Self::item_path(token)).json(json!({ "definition": fields })),
            )
            .await?
            .decode("definition")
    }

    pub async fn delete(&self, token: &str) -> Result<()> {
        self.requester
            .request(ApiRequest::delete(Self::item_path(token)))
            .await?;
        Ok(())
    }

    /// Push the definition to its linked GitHub repository.
    pub async fn sync(&self, token: &str, commit_message: Option<&str>) -> Result<Definition> {
        let path = format!("{}/sync_to_github", Self::item_path(token));
        self.requester
            .request(ApiRequest::patch(path).json(commit_body(commit_message)))
            .await?
            .decode("definition")
    }
}
